//! Date parsing and display helpers.
//!
//! The engine works exclusively with ISO `YYYY-MM-DD` calendar dates.
//! Malformed input is rejected here, at the boundary, rather than being
//! allowed to propagate into the calculation core.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// Parses an ISO `YYYY-MM-DD` date string, failing fast on malformed input.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use longshore_engine::dates::parse_iso_date;
///
/// let date = parse_iso_date("2026-04-03").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2026, 4, 3).unwrap());
/// assert!(parse_iso_date("2026-13-40").is_err());
/// assert!(parse_iso_date("not a date").is_err());
/// ```
pub fn parse_iso_date(input: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|e| EngineError::InvalidDate {
        input: input.to_string(),
        message: e.to_string(),
    })
}

/// Formats a date for display as a month abbreviation plus day.
///
/// Produces `"Nov 30"`, or `"Nov 30, 2025"` when `include_year` is set.
/// Locale-aware formatting is a display-layer concern and is intentionally
/// not handled here.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use longshore_engine::dates::format_short_date;
///
/// let date = NaiveDate::from_ymd_opt(2025, 11, 30).unwrap();
/// assert_eq!(format_short_date(date, false), "Nov 30");
/// assert_eq!(format_short_date(date, true), "Nov 30, 2025");
/// ```
pub fn format_short_date(date: NaiveDate, include_year: bool) -> String {
    if include_year {
        date.format("%b %-d, %Y").to_string()
    } else {
        date.format("%b %-d").to_string()
    }
}
