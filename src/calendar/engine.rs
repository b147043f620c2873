//! Holiday resolution engine and per-year override cache.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{HolidayRecord, QualifyingWindow};
use crate::store::EntryStore;

use super::computus::{easter_sunday, nth_weekday_of_month};
use super::curated::curated_holidays;

/// Inclusive length of the standard qualification window, in days.
pub const QUALIFYING_WINDOW_DAYS: i64 = 28;

/// Days between the end of the qualification window and the holiday itself.
pub const WINDOW_END_OFFSET_DAYS: i64 = 4;

/// Computes the default qualification window for a holiday date.
///
/// The window ends [`WINDOW_END_OFFSET_DAYS`] before the holiday and spans
/// [`QUALIFYING_WINDOW_DAYS`] inclusive days. Used for procedurally computed
/// holidays and as the last-resort recomputation when no stored window is
/// found.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use longshore_engine::calendar::default_window;
///
/// let window = default_window(NaiveDate::from_ymd_opt(2030, 12, 25).unwrap());
/// assert_eq!(window.end, NaiveDate::from_ymd_opt(2030, 12, 21).unwrap());
/// assert_eq!(window.length_days(), 28);
/// ```
pub fn default_window(stat_date: NaiveDate) -> QualifyingWindow {
    let end = stat_date - Duration::days(WINDOW_END_OFFSET_DAYS);
    let start = end - Duration::days(QUALIFYING_WINDOW_DAYS - 1);
    QualifyingWindow { start, end }
}

/// Identifies which resolution tier produced a year's holiday table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidaySource {
    /// A persisted per-year override, returned verbatim.
    Override,
    /// The curated literal table for an explicitly researched year.
    Curated,
    /// The procedural fallback computation.
    Computed,
}

impl std::fmt::Display for HolidaySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HolidaySource::Override => write!(f, "override"),
            HolidaySource::Curated => write!(f, "curated"),
            HolidaySource::Computed => write!(f, "computed"),
        }
    }
}

/// A year-keyed cache of persisted holiday overrides.
///
/// The cache is monotonic: entries are published once and never removed or
/// mutated. Population follows compute-then-publish — a full per-year record
/// set is built first and inserted atomically, so concurrent readers see
/// either no entry or a complete one.
#[derive(Debug, Default)]
pub struct HolidayCache {
    years: RwLock<HashMap<i32, Vec<HolidayRecord>>>,
}

impl HolidayCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes a complete record set for a year.
    ///
    /// The first publication wins; later calls for the same year are ignored,
    /// preserving the cache's monotonicity.
    pub fn publish(&self, year: i32, records: Vec<HolidayRecord>) {
        let mut years = self.years.write().expect("holiday cache lock poisoned");
        years.entry(year).or_insert(records);
    }

    /// Returns the cached record set for a year, if one was published.
    pub fn get(&self, year: i32) -> Option<Vec<HolidayRecord>> {
        let years = self.years.read().expect("holiday cache lock poisoned");
        years.get(&year).cloned()
    }
}

/// Produces statutory holidays and qualification windows for any year.
///
/// Resolution precedence per year: persisted override (if present and
/// non-empty), then the curated table, then procedural computation. An
/// unmapped year is not an error — it always falls through to computation.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use longshore_engine::calendar::CalendarEngine;
///
/// let engine = CalendarEngine::new();
/// let holidays = engine.holidays_for_year(2026);
/// assert_eq!(holidays.len(), 13);
///
/// let reference = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
/// let next = engine.next_holiday(reference).unwrap();
/// assert_eq!(next.name, "Good Friday");
/// ```
#[derive(Debug, Default)]
pub struct CalendarEngine {
    overrides: HolidayCache,
}

impl CalendarEngine {
    /// Creates an engine with an empty override cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine around an explicitly-owned override cache.
    pub fn with_cache(overrides: HolidayCache) -> Self {
        Self { overrides }
    }

    /// Loads persisted overrides for the given years from the entry store.
    ///
    /// Years without overrides are skipped; loaded years are published into
    /// the cache as complete record sets.
    pub fn load_overrides<S, I>(&self, store: &S, years: I) -> EngineResult<()>
    where
        S: EntryStore + ?Sized,
        I: IntoIterator<Item = i32>,
    {
        for year in years {
            if let Some(records) = store.holiday_overrides(year)? {
                debug!(year, count = records.len(), "loaded holiday overrides");
                self.overrides.publish(year, records);
            }
        }
        Ok(())
    }

    /// Returns the year's statutory holidays, ordered ascending by date.
    ///
    /// Never fails: unmapped years fall through to the computed tier.
    pub fn holidays_for_year(&self, year: i32) -> Vec<HolidayRecord> {
        self.resolve(year).0
    }

    /// Returns the year's holidays together with the tier that produced them.
    ///
    /// Tiers are tried in a fixed order; the first to yield a non-empty
    /// table wins.
    pub fn resolve(&self, year: i32) -> (Vec<HolidayRecord>, HolidaySource) {
        let tiers: [(HolidaySource, fn(&Self, i32) -> Option<Vec<HolidayRecord>>); 2] = [
            (HolidaySource::Override, Self::override_tier),
            (HolidaySource::Curated, Self::curated_tier),
        ];

        for (source, tier) in tiers {
            if let Some(records) = tier(self, year) {
                debug!(year, source = %source, "resolved holiday calendar");
                return (records, source);
            }
        }

        debug!(year, source = %HolidaySource::Computed, "resolved holiday calendar");
        (computed_holidays(year), HolidaySource::Computed)
    }

    fn override_tier(&self, year: i32) -> Option<Vec<HolidayRecord>> {
        self.overrides.get(year).filter(|records| !records.is_empty())
    }

    fn curated_tier(&self, year: i32) -> Option<Vec<HolidayRecord>> {
        curated_holidays(year)
    }

    /// Returns the earliest holiday on or after the reference date.
    ///
    /// Searches the reference year and the following year. `None` is
    /// practically unreachable since every year has at least one holiday.
    pub fn next_holiday(&self, reference: NaiveDate) -> Option<HolidayRecord> {
        let year = reference.year();
        self.holidays_for_year(year)
            .into_iter()
            .chain(self.holidays_for_year(year + 1))
            .find(|h| h.date >= reference)
    }

    /// Returns the qualification window for a holiday date.
    ///
    /// Looks the holiday up by exact date across the reference year and the
    /// following year; when no stored record matches, recomputes the default
    /// window directly from the date. Total — never fails.
    pub fn qualifying_window(
        &self,
        reference: NaiveDate,
        stat_date: NaiveDate,
    ) -> QualifyingWindow {
        let year = reference.year();
        self.holidays_for_year(year)
            .into_iter()
            .chain(self.holidays_for_year(year + 1))
            .find(|h| h.date == stat_date)
            .map(|h| h.qualifying_window())
            .unwrap_or_else(|| default_window(stat_date))
    }
}

/// Computes the thirteen longshore statutory holidays for a year.
///
/// Qualification windows use the default 28-day rule; pay dates are unknown
/// for computed years.
fn computed_holidays(year: i32) -> Vec<HolidayRecord> {
    let mut holidays = vec![
        fixed_holiday("New Year's Day", year, 1, 1),
        computed_record("Family Day", nth_weekday_of_month(year, 2, Weekday::Mon, 3)),
        computed_record("Good Friday", easter_sunday(year) - Duration::days(2)),
        computed_record("Easter Monday", easter_sunday(year) + Duration::days(1)),
        computed_record("Victoria Day", victoria_day(year)),
        computed_record("Canada Day", canada_day_observed(year)),
        computed_record("BC Day", nth_weekday_of_month(year, 8, Weekday::Mon, 1)),
        computed_record("Labour Day", nth_weekday_of_month(year, 9, Weekday::Mon, 1)),
        fixed_holiday("Truth & Reconciliation", year, 9, 30),
        computed_record(
            "Thanksgiving",
            nth_weekday_of_month(year, 10, Weekday::Mon, 2),
        ),
        fixed_holiday("Remembrance Day", year, 11, 11),
        fixed_holiday("Christmas", year, 12, 25),
        fixed_holiday("Boxing Day", year, 12, 26),
    ];
    holidays.sort_by_key(|h| h.date);
    holidays
}

fn fixed_holiday(name: &str, year: i32, month: u32, day: u32) -> HolidayRecord {
    let date = NaiveDate::from_ymd_opt(year, month, day).expect("fixed holiday date is valid");
    computed_record(name, date)
}

fn computed_record(name: &str, date: NaiveDate) -> HolidayRecord {
    let window = default_window(date);
    HolidayRecord {
        name: name.to_string(),
        date,
        qualification_start: window.start,
        qualification_end: window.end,
        pay_date: None,
    }
}

/// Victoria Day: the Monday on or before May 24.
fn victoria_day(year: i32) -> NaiveDate {
    let may_24 = NaiveDate::from_ymd_opt(year, 5, 24).expect("May 24 exists");
    let back = may_24.weekday().num_days_from_monday();
    may_24 - Duration::days(i64::from(back))
}

/// Canada Day: July 1, observed on July 2 when July 1 falls on a Sunday.
fn canada_day_observed(year: i32) -> NaiveDate {
    let jul_1 = NaiveDate::from_ymd_opt(year, 7, 1).expect("July 1 exists");
    if jul_1.weekday() == Weekday::Sun {
        jul_1 + Duration::days(1)
    } else {
        jul_1
    }
}
