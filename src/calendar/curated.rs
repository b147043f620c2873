//! Curated statutory holiday tables.
//!
//! These years were researched against the published longshore dispatch
//! schedule: the qualification windows and pay dates are the legally exact
//! ones, not the computed 28-day defaults. The table takes precedence over
//! procedural computation but yields to persisted overrides.

use chrono::NaiveDate;

use crate::models::HolidayRecord;

fn d(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").expect("curated table dates are well-formed")
}

fn holiday(name: &str, date: &str, start: &str, end: &str, pay: &str) -> HolidayRecord {
    HolidayRecord {
        name: name.to_string(),
        date: d(date),
        qualification_start: d(start),
        qualification_end: d(end),
        pay_date: Some(d(pay)),
    }
}

/// Returns the curated holiday table for a year, if one exists.
///
/// Covered years: 2026 (complete, 13 holidays) and 2027 (partial, New
/// Year's Day only — extended as schedules are published). Entries are
/// ordered ascending by date.
pub fn curated_holidays(year: i32) -> Option<Vec<HolidayRecord>> {
    match year {
        2026 => Some(holidays_2026()),
        2027 => Some(holidays_2027()),
        _ => None,
    }
}

fn holidays_2026() -> Vec<HolidayRecord> {
    vec![
        holiday(
            "New Year's Day",
            "2026-01-01",
            "2025-11-30",
            "2025-12-27",
            "2026-01-08",
        ),
        holiday(
            "Family Day",
            "2026-02-16",
            "2026-01-18",
            "2026-02-14",
            "2026-02-26",
        ),
        holiday(
            "Good Friday",
            "2026-04-03",
            "2026-03-01",
            "2026-03-28",
            "2026-04-09",
        ),
        holiday(
            "Easter Monday",
            "2026-04-06",
            "2026-03-08",
            "2026-04-04",
            "2026-04-16",
        ),
        holiday(
            "Victoria Day",
            "2026-05-18",
            "2026-04-19",
            "2026-05-16",
            "2026-05-28",
        ),
        holiday(
            "Canada Day",
            "2026-07-01",
            "2026-05-31",
            "2026-06-27",
            "2026-07-09",
        ),
        holiday(
            "BC Day",
            "2026-08-03",
            "2026-07-05",
            "2026-08-01",
            "2026-08-13",
        ),
        holiday(
            "Labour Day",
            "2026-09-07",
            "2026-08-09",
            "2026-09-05",
            "2026-09-17",
        ),
        holiday(
            "Truth & Reconciliation",
            "2026-09-30",
            "2026-08-30",
            "2026-09-26",
            "2026-10-08",
        ),
        holiday(
            "Thanksgiving",
            "2026-10-12",
            "2026-09-13",
            "2026-10-10",
            "2026-10-22",
        ),
        holiday(
            "Remembrance Day",
            "2026-11-11",
            "2026-10-13",
            "2026-11-07",
            "2026-11-19",
        ),
        holiday(
            "Christmas",
            "2026-12-25",
            "2026-11-22",
            "2026-12-19",
            "2026-12-31",
        ),
        holiday(
            "Boxing Day",
            "2026-12-26",
            "2026-11-22",
            "2026-12-19",
            "2026-12-31",
        ),
    ]
}

fn holidays_2027() -> Vec<HolidayRecord> {
    vec![holiday(
        "New Year's Day",
        "2027-01-01",
        "2026-11-29",
        "2026-12-26",
        "2027-01-07",
    )]
}
