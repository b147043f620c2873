//! Half-year accrual period computation.
//!
//! Board moves happen every six months; the calendar partitions into
//! Jan 1 - Jun 30 and Jul 1 - Dec 31 with no overlap and no gaps.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::AccrualPeriod;

/// Default average-hours target for a half-year period.
pub const DEFAULT_TARGET_HOURS: u32 = 600;

/// Returns the half-year period containing the reference date.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use longshore_engine::accrual::current_half_year_period;
///
/// let period = current_half_year_period(NaiveDate::from_ymd_opt(2026, 3, 15).unwrap());
/// assert_eq!(period.start, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
/// assert_eq!(period.end, NaiveDate::from_ymd_opt(2026, 6, 30).unwrap());
/// assert_eq!(period.label, "Jan - Jun 2026");
/// ```
pub fn current_half_year_period(reference: NaiveDate) -> AccrualPeriod {
    let year = reference.year();
    if reference.month() < 7 {
        first_half(year)
    } else {
        second_half(year)
    }
}

/// Returns the half-year period immediately before the one containing the
/// reference date, rolling back a year when the reference falls in the
/// first half.
pub fn previous_half_year_period(reference: NaiveDate) -> AccrualPeriod {
    let year = reference.year();
    if reference.month() < 7 {
        second_half(year - 1)
    } else {
        first_half(year)
    }
}

fn first_half(year: i32) -> AccrualPeriod {
    AccrualPeriod {
        start: NaiveDate::from_ymd_opt(year, 1, 1).expect("Jan 1 exists"),
        end: NaiveDate::from_ymd_opt(year, 6, 30).expect("Jun 30 exists"),
        label: format!("Jan - Jun {}", year),
        target_hours: Decimal::from(DEFAULT_TARGET_HOURS),
    }
}

fn second_half(year: i32) -> AccrualPeriod {
    AccrualPeriod {
        start: NaiveDate::from_ymd_opt(year, 7, 1).expect("Jul 1 exists"),
        end: NaiveDate::from_ymd_opt(year, 12, 31).expect("Dec 31 exists"),
        label: format!("Jul - Dec {}", year),
        target_hours: Decimal::from(DEFAULT_TARGET_HOURS),
    }
}
