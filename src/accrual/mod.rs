//! Accrual judgments over the worked-shift log.
//!
//! This module converts worked-shift aggregates into the two judgments the
//! dispatch hall cares about: statutory-holiday qualification strength over
//! the 28-day window, and half-year board-move accrual progress. It also
//! synthesizes the at-most-once summary record for a completed half-year.

mod earnings;
mod periods;
mod qualification;
mod status;
mod summary;
mod tracker;

pub use earnings::{PeriodEarnings, period_earnings};
pub use periods::{
    DEFAULT_TARGET_HOURS, current_half_year_period, previous_half_year_period,
};
pub use qualification::{
    NextHolidaySummary, QualificationStatus, REQUIRED_QUALIFYING_DAYS, STANDARD_SHIFT_HOURS,
    qualification_percent, qualification_status,
};
pub use status::{AccrualStatus, DAYS_PER_WEEK, WORKDAYS_PER_WEEK, accrual_status};
pub use summary::build_period_summary;
pub use tracker::AccrualTracker;
