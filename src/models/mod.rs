//! Data models for the longshore work-rules engine.
//!
//! This module contains the value types shared across the engine: statutory
//! holiday records and their qualifying windows, worked-shift entries, and
//! the half-year accrual periods used for board-move accounting.

mod holiday;
mod period;
mod shift;

pub use holiday::{HolidayRecord, QualifyingWindow};
pub use period::{AccrualPeriod, PeriodSummary, HALF_YEAR_PERIOD_TYPE};
pub use shift::{ShiftCategory, ShiftEntry};
