//! Moveable-feast and nth-weekday date arithmetic.

use chrono::{Datelike, NaiveDate, Weekday};

/// Computes the date of Easter Sunday for a given Gregorian year.
///
/// Uses the anonymous Gregorian computus (century/epact form), which is
/// exact for every Gregorian year >= 1900. Good Friday and Easter Monday are
/// derived from this date at -2 and +1 days.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use longshore_engine::calendar::easter_sunday;
///
/// assert_eq!(easter_sunday(2024), NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
/// assert_eq!(easter_sunday(2025), NaiveDate::from_ymd_opt(2025, 4, 20).unwrap());
/// ```
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .expect("computus yields a valid calendar date")
}

/// Returns the date of the nth occurrence of a weekday in a month.
///
/// `month` is 1-based (1 = January). For `n <= 4` the result always exists;
/// a 5th occurrence may land past the end of short months, in which case the
/// caller's request is a contract violation.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use longshore_engine::calendar::nth_weekday_of_month;
///
/// // Family Day: 3rd Monday of February
/// assert_eq!(
///     nth_weekday_of_month(2026, 2, Weekday::Mon, 3),
///     NaiveDate::from_ymd_opt(2026, 2, 16).unwrap()
/// );
/// ```
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u32) -> NaiveDate {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("month in 1..=12");
    let offset = (weekday.num_days_from_monday() + 7 - first.weekday().num_days_from_monday()) % 7;
    let day = 1 + offset + (n - 1) * 7;
    NaiveDate::from_ymd_opt(year, month, day).expect("nth weekday falls inside the month")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    /// CP-001: Easter 2024 = March 31
    #[test]
    fn test_easter_2024() {
        assert_eq!(easter_sunday(2024), make_date("2024-03-31"));
    }

    /// CP-002: Easter 2025 = April 20
    #[test]
    fn test_easter_2025() {
        assert_eq!(easter_sunday(2025), make_date("2025-04-20"));
    }

    /// CP-003: Easter 2026 = April 5
    #[test]
    fn test_easter_2026() {
        assert_eq!(easter_sunday(2026), make_date("2026-04-05"));
    }

    /// CP-004: historical and far-future reference dates
    #[test]
    fn test_easter_reference_years() {
        // Known computus results across centuries.
        assert_eq!(easter_sunday(1900), make_date("1900-04-15"));
        assert_eq!(easter_sunday(1943), make_date("1943-04-25"));
        assert_eq!(easter_sunday(2000), make_date("2000-04-23"));
        assert_eq!(easter_sunday(2008), make_date("2008-03-23"));
        assert_eq!(easter_sunday(2038), make_date("2038-04-25"));
        assert_eq!(easter_sunday(2100), make_date("2100-03-28"));
    }

    /// CP-005: Easter always lands on a Sunday in March 22 - April 25
    #[test]
    fn test_easter_is_always_sunday_in_range() {
        for year in 1900..=2199 {
            let easter = easter_sunday(year);
            assert_eq!(easter.weekday(), Weekday::Sun, "year {}", year);
            let lower = make_date(&format!("{:04}-03-22", year));
            let upper = make_date(&format!("{:04}-04-25", year));
            assert!(easter >= lower && easter <= upper, "year {}", year);
        }
    }

    /// CP-006: 3rd Monday of February 2026 = Feb 16 (Family Day)
    #[test]
    fn test_third_monday_february_2026() {
        assert_eq!(
            nth_weekday_of_month(2026, 2, Weekday::Mon, 3),
            make_date("2026-02-16")
        );
    }

    /// CP-007: month starting on the target weekday
    #[test]
    fn test_month_starting_on_target_weekday() {
        // June 2026 starts on a Monday; the 1st Monday is June 1.
        assert_eq!(
            nth_weekday_of_month(2026, 6, Weekday::Mon, 1),
            make_date("2026-06-01")
        );
        assert_eq!(
            nth_weekday_of_month(2026, 6, Weekday::Mon, 2),
            make_date("2026-06-08")
        );
    }

    /// CP-008: month starting just after the target weekday
    #[test]
    fn test_month_starting_after_target_weekday() {
        // March 2026 starts on a Sunday; the 1st Monday is March 2,
        // the 1st Sunday is March 1.
        assert_eq!(
            nth_weekday_of_month(2026, 3, Weekday::Mon, 1),
            make_date("2026-03-02")
        );
        assert_eq!(
            nth_weekday_of_month(2026, 3, Weekday::Sun, 1),
            make_date("2026-03-01")
        );
    }

    /// CP-009: known holiday anchors
    #[test]
    fn test_known_holiday_anchors() {
        // Labour Day 2026: 1st Monday of September = Sep 7.
        assert_eq!(
            nth_weekday_of_month(2026, 9, Weekday::Mon, 1),
            make_date("2026-09-07")
        );
        // Thanksgiving 2026: 2nd Monday of October = Oct 12.
        assert_eq!(
            nth_weekday_of_month(2026, 10, Weekday::Mon, 2),
            make_date("2026-10-12")
        );
        // BC Day 2026: 1st Monday of August = Aug 3.
        assert_eq!(
            nth_weekday_of_month(2026, 8, Weekday::Mon, 1),
            make_date("2026-08-03")
        );
    }

    /// CP-010: every first-day weekday is handled without off-by-one
    #[test]
    fn test_all_first_day_weekdays() {
        // The twelve months of 2026 cover all seven starting weekdays.
        for month in 1..=12 {
            let result = nth_weekday_of_month(2026, month, Weekday::Fri, 1);
            assert_eq!(result.weekday(), Weekday::Fri);
            assert!(result.day() <= 7, "first Friday must fall in days 1-7");
            assert_eq!(result.month(), month);
        }
    }
}
