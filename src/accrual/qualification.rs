//! Statutory-holiday qualification strength.
//!
//! A worker earns full holiday pay by logging shifts on at least 15 distinct
//! days inside the holiday's 28-day qualification window; partial counts
//! scale the estimated pay linearly.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{HolidayRecord, QualifyingWindow};

/// Distinct worked days required inside the window for full qualification.
pub const REQUIRED_QUALIFYING_DAYS: u32 = 15;

/// Hours in one standard shift; stat pay is one day-shift at this length.
pub const STANDARD_SHIFT_HOURS: u32 = 8;

/// The next holiday as carried on a qualification status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextHolidaySummary {
    /// The holiday name.
    pub name: String,
    /// The holiday date.
    pub date: NaiveDate,
    /// Days from the reference date until the holiday.
    pub days_until: i64,
}

/// Derived statutory-holiday qualification judgment.
///
/// A pure value: computed on demand, never persisted. When no upcoming
/// holiday can be found the status is neutral — zero counts, zero pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualificationStatus {
    /// The next upcoming holiday, if one was found.
    pub next_holiday: Option<NextHolidaySummary>,
    /// The qualification window for that holiday.
    pub qualifying_window: Option<QualifyingWindow>,
    /// Distinct days with a logged shift inside the window.
    pub days_worked: u32,
    /// Days required for full qualification.
    pub days_required: u32,
    /// Qualification strength, capped at 100.
    pub qualification_percent: Decimal,
    /// Estimated stat pay at the current qualification strength.
    pub estimated_pay: Decimal,
    /// Full stat pay (one standard day shift).
    pub full_pay: Decimal,
}

impl QualificationStatus {
    /// The neutral status returned when no upcoming holiday exists.
    pub fn neutral() -> Self {
        Self {
            next_holiday: None,
            qualifying_window: None,
            days_worked: 0,
            days_required: REQUIRED_QUALIFYING_DAYS,
            qualification_percent: Decimal::ZERO,
            estimated_pay: Decimal::ZERO,
            full_pay: Decimal::ZERO,
        }
    }
}

/// Computes qualification strength from a worked-day count.
///
/// `min(days_worked / 15 * 100, 100)` — non-decreasing in `days_worked` and
/// capped once the required count is reached.
pub fn qualification_percent(days_worked: u32) -> Decimal {
    let percent = Decimal::from(days_worked) / Decimal::from(REQUIRED_QUALIFYING_DAYS)
        * Decimal::from(100);
    percent.min(Decimal::from(100))
}

/// Builds the full qualification status for a holiday.
///
/// # Arguments
///
/// * `holiday` - The next upcoming holiday
/// * `window` - Its qualification window
/// * `days_worked` - Distinct worked days inside the window
/// * `reference` - The date the judgment is made from
/// * `day_rate` - The applicable day-shift hourly rate
pub fn qualification_status(
    holiday: &HolidayRecord,
    window: QualifyingWindow,
    days_worked: u32,
    reference: NaiveDate,
    day_rate: Decimal,
) -> QualificationStatus {
    let percent = qualification_percent(days_worked);
    let full_pay = Decimal::from(STANDARD_SHIFT_HOURS) * day_rate;
    let estimated_pay = percent / Decimal::from(100) * full_pay;

    QualificationStatus {
        next_holiday: Some(NextHolidaySummary {
            name: holiday.name.clone(),
            date: holiday.date,
            days_until: holiday.days_until(reference),
        }),
        qualifying_window: Some(window),
        days_worked,
        days_required: REQUIRED_QUALIFYING_DAYS,
        qualification_percent: percent,
        estimated_pay,
        full_pay,
    }
}
