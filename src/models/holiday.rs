//! Statutory holiday records and qualifying windows.
//!
//! A statutory holiday carries the legally relevant calendar date plus the
//! qualification window a worker must log shifts in to earn holiday pay.
//! Records are immutable once computed or loaded for a given year.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The rolling period before a statutory holiday during which worked days
/// count toward holiday-pay eligibility.
///
/// Both bounds are inclusive; the standard window spans 28 days.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use longshore_engine::models::QualifyingWindow;
///
/// let window = QualifyingWindow {
///     start: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
///     end: NaiveDate::from_ymd_opt(2026, 3, 28).unwrap(),
/// };
/// assert_eq!(window.length_days(), 28);
/// assert!(window.contains(NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifyingWindow {
    /// The first day of the window (inclusive).
    pub start: NaiveDate,
    /// The last day of the window (inclusive).
    pub end: NaiveDate,
}

impl QualifyingWindow {
    /// Returns the inclusive length of the window in days.
    pub fn length_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Checks whether a date falls within the window (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// A statutory holiday with its qualification window.
///
/// Produced fresh per query when computed procedurally, or loaded once into
/// the per-year cache when a persisted override exists. The `pay_date` is
/// only known for curated and persisted entries; computed holidays omit it.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use longshore_engine::models::HolidayRecord;
///
/// let holiday = HolidayRecord {
///     name: "Good Friday".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 4, 3).unwrap(),
///     qualification_start: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
///     qualification_end: NaiveDate::from_ymd_opt(2026, 3, 28).unwrap(),
///     pay_date: Some(NaiveDate::from_ymd_opt(2026, 4, 9).unwrap()),
/// };
/// assert_eq!(holiday.qualifying_window().length_days(), 28);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    /// The name of the holiday (e.g., "Good Friday").
    pub name: String,
    /// The calendar date the holiday falls on.
    pub date: NaiveDate,
    /// Start of the qualification window (inclusive).
    pub qualification_start: NaiveDate,
    /// End of the qualification window (inclusive).
    pub qualification_end: NaiveDate,
    /// The date stat pay is received, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_date: Option<NaiveDate>,
}

impl HolidayRecord {
    /// Returns the stored qualification window as a [`QualifyingWindow`].
    pub fn qualifying_window(&self) -> QualifyingWindow {
        QualifyingWindow {
            start: self.qualification_start,
            end: self.qualification_end,
        }
    }

    /// Returns the number of days from `reference` until the holiday.
    ///
    /// Negative when the holiday is already past.
    pub fn days_until(&self, reference: NaiveDate) -> i64 {
        (self.date - reference).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn good_friday_2026() -> HolidayRecord {
        HolidayRecord {
            name: "Good Friday".to_string(),
            date: make_date("2026-04-03"),
            qualification_start: make_date("2026-03-01"),
            qualification_end: make_date("2026-03-28"),
            pay_date: Some(make_date("2026-04-09")),
        }
    }

    /// HR-001: window length is inclusive of both bounds
    #[test]
    fn test_window_length_inclusive() {
        let window = good_friday_2026().qualifying_window();
        assert_eq!(window.length_days(), 28);
    }

    /// HR-002: window containment at bounds
    #[test]
    fn test_window_contains_bounds() {
        let window = good_friday_2026().qualifying_window();
        assert!(window.contains(make_date("2026-03-01")));
        assert!(window.contains(make_date("2026-03-28")));
        assert!(!window.contains(make_date("2026-02-28")));
        assert!(!window.contains(make_date("2026-03-29")));
    }

    /// HR-003: days_until counts forward and backward
    #[test]
    fn test_days_until() {
        let holiday = good_friday_2026();
        assert_eq!(holiday.days_until(make_date("2026-03-15")), 19);
        assert_eq!(holiday.days_until(make_date("2026-04-03")), 0);
        assert_eq!(holiday.days_until(make_date("2026-04-05")), -2);
    }

    #[test]
    fn test_serialization_round_trip() {
        let holiday = good_friday_2026();
        let json = serde_json::to_string(&holiday).unwrap();
        let deserialized: HolidayRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(holiday, deserialized);
    }

    #[test]
    fn test_pay_date_omitted_when_absent() {
        let mut holiday = good_friday_2026();
        holiday.pay_date = None;
        let json = serde_json::to_string(&holiday).unwrap();
        assert!(!json.contains("pay_date"));
    }

    #[test]
    fn test_deserialize_without_pay_date() {
        let json = r#"{
            "name": "Remembrance Day",
            "date": "2030-11-11",
            "qualification_start": "2030-10-11",
            "qualification_end": "2030-11-07"
        }"#;
        let holiday: HolidayRecord = serde_json::from_str(json).unwrap();
        assert_eq!(holiday.pay_date, None);
        assert_eq!(holiday.date, make_date("2030-11-11"));
    }
}
