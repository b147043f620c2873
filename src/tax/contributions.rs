//! Capped flat-rate social-insurance contributions.

use rust_decimal::Decimal;

use crate::config::ContributionRule;

/// Computes a capped contribution under a scheme's rule.
///
/// Pensionable/insurable earnings are `min(income, ceiling)` minus the
/// scheme's basic exemption, floored at zero; the contribution is the flat
/// rate on those earnings, bounded by the contribution ceiling.
///
/// # Example
///
/// ```
/// use longshore_engine::config::TaxYearConfig;
/// use longshore_engine::tax::capped_contribution;
/// use rust_decimal::Decimal;
///
/// let config = TaxYearConfig::year_2024();
/// // High income pins the CPP contribution at its 2024 ceiling.
/// let contribution = capped_contribution(Decimal::from(200_000), &config.pension);
/// assert_eq!(contribution, config.pension.contribution_ceiling);
/// ```
pub fn capped_contribution(income: Decimal, rule: &ContributionRule) -> Decimal {
    let earnings = income.min(rule.earnings_ceiling) - rule.basic_exemption;
    if earnings <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (earnings * rule.rate).min(rule.contribution_ceiling)
}
