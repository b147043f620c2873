//! The accrual tracker, composing the calendar and the entry store.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;

use crate::calendar::CalendarEngine;
use crate::error::EngineResult;
use crate::models::PeriodSummary;
use crate::store::EntryStore;

use super::earnings::{PeriodEarnings, period_earnings};
use super::periods::{current_half_year_period, previous_half_year_period};
use super::qualification::{QualificationStatus, qualification_status};
use super::status::{AccrualStatus, accrual_status};
use super::summary::build_period_summary;

/// Derives qualification and accrual judgments from the shift log.
///
/// The tracker holds no state of its own; every method is a fresh
/// computation over the calendar and the store's aggregates.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use longshore_engine::accrual::AccrualTracker;
/// use longshore_engine::calendar::CalendarEngine;
/// use longshore_engine::store::InMemoryStore;
/// use rust_decimal::Decimal;
///
/// let calendar = CalendarEngine::new();
/// let store = InMemoryStore::new();
/// let tracker = AccrualTracker::new(&calendar, &store);
///
/// let reference = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
/// let status = tracker.holiday_qualification(reference, Decimal::from(52)).unwrap();
/// assert_eq!(status.next_holiday.unwrap().name, "Good Friday");
/// ```
pub struct AccrualTracker<'a, S: EntryStore + ?Sized> {
    calendar: &'a CalendarEngine,
    store: &'a S,
}

impl<'a, S: EntryStore + ?Sized> AccrualTracker<'a, S> {
    /// Creates a tracker over a calendar engine and an entry store.
    pub fn new(calendar: &'a CalendarEngine, store: &'a S) -> Self {
        Self { calendar, store }
    }

    /// Computes statutory-holiday qualification strength for the next
    /// upcoming holiday.
    ///
    /// Returns the neutral zero status when no holiday can be found; store
    /// failures propagate.
    pub fn holiday_qualification(
        &self,
        reference: NaiveDate,
        day_rate: Decimal,
    ) -> EngineResult<QualificationStatus> {
        let Some(holiday) = self.calendar.next_holiday(reference) else {
            return Ok(QualificationStatus::neutral());
        };

        let window = self.calendar.qualifying_window(reference, holiday.date);
        let days_worked = self.store.worked_days_count(window.start, window.end)?;

        Ok(qualification_status(
            &holiday,
            window,
            days_worked,
            reference,
            day_rate,
        ))
    }

    /// Computes accrual progress for the half-year period containing the
    /// reference date.
    ///
    /// Hours are aggregated from the period start through the reference
    /// date; the pace projection runs from the reference to the period end.
    pub fn average_hours_status(
        &self,
        reference: NaiveDate,
        target_hours: Decimal,
    ) -> EngineResult<AccrualStatus> {
        let period = current_half_year_period(reference);
        let current_hours = self.store.total_hours(period.start, reference)?;
        Ok(accrual_status(
            current_hours,
            target_hours,
            reference,
            period.end,
        ))
    }

    /// Computes earnings totals and averages for a date range.
    pub fn period_earnings(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<PeriodEarnings> {
        let total_hours = self.store.total_hours(start, end)?;
        let total_earnings = self.store.total_earnings(start, end)?;
        let entry_count = self.store.worked_days_count(start, end)?;
        Ok(period_earnings(total_hours, total_earnings, entry_count))
    }

    /// Synthesizes the summary for the previous half-year period, at most
    /// once.
    ///
    /// Skips silently when a summary already exists or the period has no
    /// logged shifts. The write goes through the store's atomic
    /// check-and-insert, so a concurrent duplicate attempt loses cleanly
    /// and also returns `None`.
    pub fn synthesize_previous_period_summary(
        &self,
        reference: NaiveDate,
    ) -> EngineResult<Option<PeriodSummary>> {
        let period = previous_half_year_period(reference);

        if self.store.has_period_summary(period.start, period.end)? {
            return Ok(None);
        }

        let days_worked = self.store.worked_days_count(period.start, period.end)?;
        if days_worked == 0 {
            return Ok(None);
        }

        let total_hours = self.store.total_hours(period.start, period.end)?;
        let total_earnings = self.store.total_earnings(period.start, period.end)?;
        let summary = build_period_summary(&period, total_hours, total_earnings, days_worked);

        if !self.store.insert_period_summary_if_absent(&summary)? {
            return Ok(None);
        }

        info!(
            period = %period.label,
            days_worked,
            "synthesized half-year period summary"
        );
        Ok(Some(summary))
    }
}
