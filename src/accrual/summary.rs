//! Period summary construction.

use rust_decimal::Decimal;

use crate::models::{AccrualPeriod, HALF_YEAR_PERIOD_TYPE, PeriodSummary};

/// Builds the summary record for a completed half-year period.
///
/// The structured totals are mirrored into the free-form payload alongside
/// the per-day averages and the target-met flag.
pub fn build_period_summary(
    period: &AccrualPeriod,
    total_hours: Decimal,
    total_earnings: Decimal,
    days_worked: u32,
) -> PeriodSummary {
    let days = Decimal::from(days_worked);
    let average_hours_per_day = if days_worked > 0 {
        total_hours / days
    } else {
        Decimal::ZERO
    };
    let average_earnings_per_day = if days_worked > 0 {
        total_earnings / days
    } else {
        Decimal::ZERO
    };

    PeriodSummary {
        period_type: HALF_YEAR_PERIOD_TYPE.to_string(),
        period_start: period.start,
        period_end: period.end,
        total_hours,
        total_earnings,
        days_worked,
        summary: serde_json::json!({
            "period": period.label,
            "totalHours": total_hours.to_string(),
            "totalEarnings": total_earnings.to_string(),
            "daysWorked": days_worked,
            "averageHoursPerDay": average_hours_per_day.to_string(),
            "averageEarningsPerDay": average_earnings_per_day.to_string(),
            "targetHours": period.target_hours.to_string(),
            "targetMet": total_hours >= period.target_hours,
        }),
    }
}
