//! The persisted record store collaborator interface.
//!
//! The engine performs no I/O of its own; everything it needs from the
//! entry log is expressed as single, atomic reads over a date range, plus
//! one atomic check-and-insert for synthesized period summaries. A real
//! deployment backs this trait with the application database; the bundled
//! [`InMemoryStore`] serves tests, benchmarks, and callers without one.

use std::collections::BTreeSet;
use std::sync::Mutex;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{HolidayRecord, PeriodSummary, ShiftEntry};

/// Read/write access to the persisted entry log.
///
/// All methods are treated as single atomic calls; the engine does not
/// manage transactions across them.
pub trait EntryStore {
    /// Returns the persisted holiday overrides for a year, if any exist.
    ///
    /// A `Some` with a non-empty list takes precedence over both the curated
    /// table and the computed fallback for that year.
    fn holiday_overrides(&self, year: i32) -> EngineResult<Option<Vec<HolidayRecord>>>;

    /// Counts distinct calendar days with at least one logged shift in the
    /// inclusive range `[start, end]`.
    fn worked_days_count(&self, start: NaiveDate, end: NaiveDate) -> EngineResult<u32>;

    /// Sums logged hours over the inclusive range `[start, end]`.
    fn total_hours(&self, start: NaiveDate, end: NaiveDate) -> EngineResult<Decimal>;

    /// Sums logged earnings over the inclusive range `[start, end]`.
    ///
    /// Entries without a recorded earnings figure contribute zero.
    fn total_earnings(&self, start: NaiveDate, end: NaiveDate) -> EngineResult<Decimal>;

    /// Checks whether a period summary exists for the exact range.
    fn has_period_summary(&self, start: NaiveDate, end: NaiveDate) -> EngineResult<bool>;

    /// Inserts a period summary unless one already exists for its range.
    ///
    /// Returns `true` when the summary was inserted, `false` when an
    /// existing summary was kept. Implementations must make the check and
    /// the insert a single atomic step.
    fn insert_period_summary_if_absent(&self, summary: &PeriodSummary) -> EngineResult<bool>;
}

/// An in-memory [`EntryStore`] backed by a shift log.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use longshore_engine::models::{ShiftCategory, ShiftEntry};
/// use longshore_engine::store::{EntryStore, InMemoryStore};
/// use rust_decimal::Decimal;
///
/// let store = InMemoryStore::new();
/// store.log_shift(ShiftEntry {
///     date: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
///     category: ShiftCategory::Day,
///     hours: Decimal::from(8),
///     earnings: Some(Decimal::from(400)),
/// });
///
/// let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 3, 31).unwrap();
/// assert_eq!(store.worked_days_count(start, end).unwrap(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: Mutex<StoreInner>,
}

#[derive(Debug, Default)]
struct StoreInner {
    entries: Vec<ShiftEntry>,
    overrides: Vec<HolidayRecord>,
    summaries: Vec<PeriodSummary>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a shift to the log.
    pub fn log_shift(&self, entry: ShiftEntry) {
        self.lock().entries.push(entry);
    }

    /// Installs a persisted holiday override record.
    pub fn add_holiday_override(&self, record: HolidayRecord) {
        self.lock().overrides.push(record);
    }

    /// Returns all period summaries, ordered by insertion.
    pub fn period_summaries(&self) -> Vec<PeriodSummary> {
        self.lock().summaries.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreInner> {
        // A poisoned mutex means a writer panicked; surface that loudly.
        self.inner.lock().expect("entry store mutex poisoned")
    }
}

impl EntryStore for InMemoryStore {
    fn holiday_overrides(&self, year: i32) -> EngineResult<Option<Vec<HolidayRecord>>> {
        let inner = self.lock();
        let mut records: Vec<HolidayRecord> = inner
            .overrides
            .iter()
            .filter(|h| h.date.year() == year)
            .cloned()
            .collect();
        if records.is_empty() {
            return Ok(None);
        }
        records.sort_by_key(|h| h.date);
        Ok(Some(records))
    }

    fn worked_days_count(&self, start: NaiveDate, end: NaiveDate) -> EngineResult<u32> {
        let inner = self.lock();
        let days: BTreeSet<NaiveDate> = inner
            .entries
            .iter()
            .filter(|e| e.date >= start && e.date <= end)
            .map(|e| e.date)
            .collect();
        u32::try_from(days.len()).map_err(|_| EngineError::Store {
            message: "worked day count exceeds u32".to_string(),
        })
    }

    fn total_hours(&self, start: NaiveDate, end: NaiveDate) -> EngineResult<Decimal> {
        let inner = self.lock();
        Ok(inner
            .entries
            .iter()
            .filter(|e| e.date >= start && e.date <= end)
            .map(|e| e.hours)
            .sum())
    }

    fn total_earnings(&self, start: NaiveDate, end: NaiveDate) -> EngineResult<Decimal> {
        let inner = self.lock();
        Ok(inner
            .entries
            .iter()
            .filter(|e| e.date >= start && e.date <= end)
            .filter_map(|e| e.earnings)
            .sum())
    }

    fn has_period_summary(&self, start: NaiveDate, end: NaiveDate) -> EngineResult<bool> {
        let inner = self.lock();
        Ok(inner
            .summaries
            .iter()
            .any(|s| s.period_start == start && s.period_end == end))
    }

    fn insert_period_summary_if_absent(&self, summary: &PeriodSummary) -> EngineResult<bool> {
        // Check and insert under a single lock acquisition.
        let mut inner = self.lock();
        let exists = inner
            .summaries
            .iter()
            .any(|s| s.period_start == summary.period_start && s.period_end == summary.period_end);
        if exists {
            return Ok(false);
        }
        inner.summaries.push(summary.clone());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftCategory;
    use std::str::FromStr;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn shift(date: &str, hours: &str, earnings: Option<&str>) -> ShiftEntry {
        ShiftEntry {
            date: make_date(date),
            category: ShiftCategory::Day,
            hours: dec(hours),
            earnings: earnings.map(dec),
        }
    }

    /// ST-001: distinct worked days, not entry count
    #[test]
    fn test_worked_days_count_distinct() {
        let store = InMemoryStore::new();
        store.log_shift(shift("2026-03-10", "8", Some("400")));
        store.log_shift(shift("2026-03-10", "4", Some("200"))); // double shift
        store.log_shift(shift("2026-03-11", "8", Some("400")));

        let count = store
            .worked_days_count(make_date("2026-03-01"), make_date("2026-03-31"))
            .unwrap();
        assert_eq!(count, 2);
    }

    /// ST-002: range filtering is inclusive of both bounds
    #[test]
    fn test_range_is_inclusive() {
        let store = InMemoryStore::new();
        store.log_shift(shift("2026-03-01", "8", Some("400")));
        store.log_shift(shift("2026-03-31", "8", Some("400")));
        store.log_shift(shift("2026-04-01", "8", Some("400")));

        let hours = store
            .total_hours(make_date("2026-03-01"), make_date("2026-03-31"))
            .unwrap();
        assert_eq!(hours, dec("16"));
    }

    /// ST-003: entries without earnings contribute zero to the earnings sum
    #[test]
    fn test_missing_earnings_contribute_zero() {
        let store = InMemoryStore::new();
        store.log_shift(shift("2026-03-10", "8", Some("400.50")));
        store.log_shift(shift("2026-03-11", "8", None));

        let earnings = store
            .total_earnings(make_date("2026-03-01"), make_date("2026-03-31"))
            .unwrap();
        assert_eq!(earnings, dec("400.50"));
    }

    /// ST-004: insert-if-absent refuses duplicates for the same range
    #[test]
    fn test_insert_summary_if_absent() {
        let store = InMemoryStore::new();
        let summary = PeriodSummary {
            period_type: crate::models::HALF_YEAR_PERIOD_TYPE.to_string(),
            period_start: make_date("2025-07-01"),
            period_end: make_date("2025-12-31"),
            total_hours: dec("600"),
            total_earnings: dec("28000"),
            days_worked: 72,
            summary: serde_json::json!({}),
        };

        assert!(store.insert_period_summary_if_absent(&summary).unwrap());
        assert!(!store.insert_period_summary_if_absent(&summary).unwrap());
        assert_eq!(store.period_summaries().len(), 1);
        assert!(
            store
                .has_period_summary(make_date("2025-07-01"), make_date("2025-12-31"))
                .unwrap()
        );
    }

    /// ST-005: overrides are filtered by year and sorted by date
    #[test]
    fn test_overrides_by_year() {
        let store = InMemoryStore::new();
        store.add_holiday_override(HolidayRecord {
            name: "Christmas".to_string(),
            date: make_date("2026-12-25"),
            qualification_start: make_date("2026-11-22"),
            qualification_end: make_date("2026-12-19"),
            pay_date: None,
        });
        store.add_holiday_override(HolidayRecord {
            name: "New Year's Day".to_string(),
            date: make_date("2026-01-01"),
            qualification_start: make_date("2025-11-30"),
            qualification_end: make_date("2025-12-27"),
            pay_date: None,
        });

        let records = store.holiday_overrides(2026).unwrap().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "New Year's Day");
        assert!(store.holiday_overrides(2025).unwrap().is_none());
    }
}
