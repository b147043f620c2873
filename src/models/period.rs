//! Half-year accrual periods and synthesized period summaries.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The period type recorded on half-year summaries.
pub const HALF_YEAR_PERIOD_TYPE: &str = "half_year";

/// One of the two fixed six-month accrual spans per calendar year.
///
/// Board-move accounting partitions every year into Jan 1 - Jun 30 and
/// Jul 1 - Dec 31; exactly one period contains any given date.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use longshore_engine::models::AccrualPeriod;
/// use rust_decimal::Decimal;
///
/// let period = AccrualPeriod {
///     start: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end: NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
///     label: "Jan - Jun 2026".to_string(),
///     target_hours: Decimal::from(600),
/// };
/// assert!(period.contains(NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualPeriod {
    /// The first day of the period (inclusive).
    pub start: NaiveDate,
    /// The last day of the period (inclusive).
    pub end: NaiveDate,
    /// Display label, e.g. "Jan - Jun 2026".
    pub label: String,
    /// The average-hours target for the period.
    pub target_hours: Decimal,
}

impl AccrualPeriod {
    /// Checks whether a date falls within the period (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// A synthesized summary of a completed half-year period.
///
/// Written at most once per period through the entry store's atomic
/// check-and-insert. The `summary` payload is free-form JSON carrying
/// averages and the target-met flag alongside the structured totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// The period type (currently always [`HALF_YEAR_PERIOD_TYPE`]).
    pub period_type: String,
    /// The first day of the summarized period.
    pub period_start: NaiveDate,
    /// The last day of the summarized period.
    pub period_end: NaiveDate,
    /// Total hours logged in the period.
    pub total_hours: Decimal,
    /// Total earnings logged in the period.
    pub total_earnings: Decimal,
    /// Distinct calendar days with a logged shift.
    pub days_worked: u32,
    /// Free-form summary payload.
    pub summary: serde_json::Value,
}
