//! Half-year accrual pace and the on-track heuristic.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::qualification::STANDARD_SHIFT_HOURS;

/// Assumed work days per week for the on-track heuristic.
///
/// The 5/7 ratio has no documented contractual basis; it is kept as a named
/// constant rather than silently retuned.
pub const WORKDAYS_PER_WEEK: i64 = 5;

/// Calendar days per week, the denominator of the work-day ratio.
pub const DAYS_PER_WEEK: i64 = 7;

/// Derived half-year accrual progress judgment.
///
/// A pure value with no independent lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualStatus {
    /// Hours logged so far in the period.
    pub current_hours: Decimal,
    /// The period's average-hours target.
    pub target_hours: Decimal,
    /// Progress toward the target, capped at 100.
    pub progress_percent: Decimal,
    /// Calendar days left in the period, clamped at zero.
    pub days_remaining: i64,
    /// Hours still needed to reach the target, clamped at zero.
    pub hours_needed: Decimal,
    /// Required pace in hours per remaining calendar day.
    pub pace_per_day: Decimal,
    /// Whether the remaining pace fits into standard shifts on estimated
    /// work days.
    pub on_track: bool,
}

/// Computes accrual progress toward a half-year target.
///
/// All quotients are zero-guarded: a met target, an exhausted period, or a
/// zero target produce zeros rather than arithmetic faults. The on-track
/// flag estimates remaining work days as `days_remaining * 5/7` (floored)
/// and requires the per-work-day pace to fit one standard shift; it is a
/// heuristic proxy, not a guarantee.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use longshore_engine::accrual::accrual_status;
/// use rust_decimal::Decimal;
///
/// let status = accrual_status(
///     Decimal::from(300),
///     Decimal::from(600),
///     NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
/// );
/// assert_eq!(status.progress_percent, Decimal::from(50));
/// assert!(status.on_track);
/// ```
pub fn accrual_status(
    current_hours: Decimal,
    target_hours: Decimal,
    reference: NaiveDate,
    period_end: NaiveDate,
) -> AccrualStatus {
    let progress_percent = if target_hours > Decimal::ZERO {
        (current_hours / target_hours * Decimal::from(100)).min(Decimal::from(100))
    } else {
        Decimal::ZERO
    };

    let days_remaining = (period_end - reference).num_days().max(0);
    let hours_needed = (target_hours - current_hours).max(Decimal::ZERO);

    let pace_per_day = if days_remaining > 0 {
        hours_needed / Decimal::from(days_remaining)
    } else {
        Decimal::ZERO
    };

    let work_days_remaining = days_remaining * WORKDAYS_PER_WEEK / DAYS_PER_WEEK;
    let pace_per_work_day = if work_days_remaining > 0 {
        hours_needed / Decimal::from(work_days_remaining)
    } else {
        Decimal::ZERO
    };
    let on_track = pace_per_work_day <= Decimal::from(STANDARD_SHIFT_HOURS);

    AccrualStatus {
        current_hours,
        target_hours,
        progress_percent,
        days_remaining,
        hours_needed,
        pace_per_day,
        on_track,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// AS-001: halfway to target
    #[test]
    fn test_halfway_progress() {
        let status = accrual_status(
            dec("300"),
            dec("600"),
            make_date("2026-03-15"),
            make_date("2026-06-30"),
        );
        assert_eq!(status.progress_percent, dec("50"));
        assert_eq!(status.days_remaining, 107);
        assert_eq!(status.hours_needed, dec("300"));
        // 107 * 5/7 = 76 work days; 300/76 < 8, comfortably on track.
        assert!(status.on_track);
    }

    /// AS-002: progress capped at 100 once the target is met
    #[test]
    fn test_progress_capped() {
        let status = accrual_status(
            dec("720"),
            dec("600"),
            make_date("2026-05-01"),
            make_date("2026-06-30"),
        );
        assert_eq!(status.progress_percent, dec("100"));
        assert_eq!(status.hours_needed, Decimal::ZERO);
        assert_eq!(status.pace_per_day, Decimal::ZERO);
        assert!(status.on_track);
    }

    /// AS-003: days remaining clamped at zero after the period ends
    #[test]
    fn test_days_remaining_clamped() {
        let status = accrual_status(
            dec("400"),
            dec("600"),
            make_date("2026-07-15"),
            make_date("2026-06-30"),
        );
        assert_eq!(status.days_remaining, 0);
        assert_eq!(status.pace_per_day, Decimal::ZERO);
        // No work days remain; the guarded pace of zero counts as on track.
        assert!(status.on_track);
    }

    /// AS-004: not on track when the pace exceeds a standard shift
    #[test]
    fn test_not_on_track() {
        // 14 days remaining -> 10 work days; 600 hours needed -> 60 h/day.
        let status = accrual_status(
            dec("0"),
            dec("600"),
            make_date("2026-06-16"),
            make_date("2026-06-30"),
        );
        assert_eq!(status.days_remaining, 14);
        assert!(!status.on_track);
    }

    /// AS-005: on-track boundary sits exactly at 8 hours per work day
    #[test]
    fn test_on_track_boundary() {
        // 14 days -> 10 work days. 80 hours needed -> exactly 8 h/work day.
        let at_limit = accrual_status(
            dec("520"),
            dec("600"),
            make_date("2026-06-16"),
            make_date("2026-06-30"),
        );
        assert!(at_limit.on_track);

        let over_limit = accrual_status(
            dec("519"),
            dec("600"),
            make_date("2026-06-16"),
            make_date("2026-06-30"),
        );
        assert!(!over_limit.on_track);
    }

    /// AS-006: work-day estimate floors the 5/7 ratio
    #[test]
    fn test_work_day_estimate_floors() {
        // 10 days * 5/7 = 7.14 -> 7 work days. 57 hours / 7 > 8 -> off track;
        // 56 hours / 7 = 8 exactly -> on track.
        let off = accrual_status(
            dec("543"),
            dec("600"),
            make_date("2026-06-20"),
            make_date("2026-06-30"),
        );
        assert!(!off.on_track);

        let on = accrual_status(
            dec("544"),
            dec("600"),
            make_date("2026-06-20"),
            make_date("2026-06-30"),
        );
        assert!(on.on_track);
    }

    /// AS-007: zero target is guarded
    #[test]
    fn test_zero_target_guarded() {
        let status = accrual_status(
            dec("100"),
            Decimal::ZERO,
            make_date("2026-03-15"),
            make_date("2026-06-30"),
        );
        assert_eq!(status.progress_percent, Decimal::ZERO);
        assert_eq!(status.hours_needed, Decimal::ZERO);
    }

    /// AS-008: pace per calendar day
    #[test]
    fn test_pace_per_day() {
        // 100 hours over 50 days.
        let status = accrual_status(
            dec("500"),
            dec("600"),
            make_date("2026-05-11"),
            make_date("2026-06-30"),
        );
        assert_eq!(status.days_remaining, 50);
        assert_eq!(status.pace_per_day, dec("2"));
    }
}
