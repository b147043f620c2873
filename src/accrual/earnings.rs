//! Period earnings aggregation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Earnings totals and averages for a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodEarnings {
    /// Total hours logged in the range.
    pub total_hours: Decimal,
    /// Total earnings logged in the range.
    pub total_earnings: Decimal,
    /// Distinct worked days in the range.
    pub entry_count: u32,
    /// Average earnings per worked day.
    pub average_per_entry: Decimal,
    /// Average earnings per hour.
    pub average_per_hour: Decimal,
}

/// Computes earnings averages from range totals.
///
/// Both averages are zero-guarded: no entries or no hours produce zero
/// rather than an arithmetic fault.
///
/// # Example
///
/// ```
/// use longshore_engine::accrual::period_earnings;
/// use rust_decimal::Decimal;
///
/// let earnings = period_earnings(Decimal::from(80), Decimal::from(4000), 10);
/// assert_eq!(earnings.average_per_entry, Decimal::from(400));
/// assert_eq!(earnings.average_per_hour, Decimal::from(50));
/// ```
pub fn period_earnings(
    total_hours: Decimal,
    total_earnings: Decimal,
    entry_count: u32,
) -> PeriodEarnings {
    let average_per_entry = if entry_count > 0 {
        total_earnings / Decimal::from(entry_count)
    } else {
        Decimal::ZERO
    };
    let average_per_hour = if total_hours > Decimal::ZERO {
        total_earnings / total_hours
    } else {
        Decimal::ZERO
    };

    PeriodEarnings {
        total_hours,
        total_earnings,
        entry_count,
        average_per_entry,
        average_per_hour,
    }
}
