//! Statutory holiday calendar for the BC longshore agreement.
//!
//! This module produces, for any year, the thirteen statutory holidays with
//! their legally relevant dates and qualification windows, resolving through
//! a fixed three-tier precedence: persisted override, curated table,
//! procedural computation. It also answers "next holiday" and "window for
//! holiday" queries.

mod computus;
mod curated;
mod engine;

pub use computus::{easter_sunday, nth_weekday_of_month};
pub use curated::curated_holidays;
pub use engine::{
    CalendarEngine, HolidayCache, HolidaySource, QUALIFYING_WINDOW_DAYS, WINDOW_END_OFFSET_DAYS,
    default_window,
};
