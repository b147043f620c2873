//! Progressive bracket-walk arithmetic.

use rust_decimal::Decimal;

use crate::config::TaxBracket;

/// Reduces gross income by a basic personal amount, floored at zero.
pub fn taxable_income(gross: Decimal, basic_personal_amount: Decimal) -> Decimal {
    (gross - basic_personal_amount).max(Decimal::ZERO)
}

/// Walks a bracket table in ascending order and accrues marginal tax.
///
/// For each bracket, tax accrues on `min(remaining, width)` at the bracket's
/// rate; the walk stops once no income remains. The caller supplies a
/// validated table (contiguous, covering `[0, infinity)`), so every dollar
/// of income lands in exactly one bracket.
///
/// # Example
///
/// ```
/// use longshore_engine::config::TaxYearConfig;
/// use longshore_engine::tax::progressive_tax;
/// use rust_decimal::Decimal;
///
/// let config = TaxYearConfig::year_2024();
/// let tax = progressive_tax(Decimal::from(40_000), &config.federal.brackets);
/// assert_eq!(tax, Decimal::from(6_000)); // 40,000 * 15%
/// ```
pub fn progressive_tax(income: Decimal, brackets: &[TaxBracket]) -> Decimal {
    let mut tax = Decimal::ZERO;
    let mut remaining = income;

    for bracket in brackets {
        if remaining <= Decimal::ZERO {
            break;
        }
        let taxable_in_bracket = match bracket.width() {
            Some(width) => remaining.min(width),
            None => remaining,
        };
        tax += taxable_in_bracket * bracket.rate;
        remaining -= taxable_in_bracket;
    }

    tax
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TaxYearConfig;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// BW-001: income inside the first bracket
    #[test]
    fn test_single_bracket() {
        let config = TaxYearConfig::year_2024();
        let tax = progressive_tax(dec("40000"), &config.federal.brackets);
        assert_eq!(tax, dec("6000"));
    }

    /// BW-002: income spanning two brackets walks both
    #[test]
    fn test_two_bracket_walk() {
        let config = TaxYearConfig::year_2024();
        // 55,867 * 0.15 + (60,000 - 55,867) * 0.205
        //   = 8,380.05 + 4,133 * 0.205 = 8,380.05 + 847.265
        let tax = progressive_tax(dec("60000"), &config.federal.brackets);
        assert_eq!(tax, dec("9227.315"));
    }

    /// BW-003: zero income, zero tax
    #[test]
    fn test_zero_income() {
        let config = TaxYearConfig::year_2024();
        assert_eq!(
            progressive_tax(Decimal::ZERO, &config.federal.brackets),
            Decimal::ZERO
        );
    }

    /// BW-004: income reaching the unbounded top bracket
    #[test]
    fn test_top_bracket() {
        let config = TaxYearConfig::year_2024();
        // 300,000 walks all five federal brackets.
        // 55,867*.15 + 55,866*.205 + 61,472*.26 + 73,547*.29 + 53,248*.33
        let expected = dec("55867") * dec("0.15")
            + dec("55866") * dec("0.205")
            + dec("61472") * dec("0.26")
            + dec("73547") * dec("0.29")
            + dec("53248") * dec("0.33");
        assert_eq!(progressive_tax(dec("300000"), &config.federal.brackets), expected);
    }

    /// BW-005: exact bracket boundary taxes entirely at the lower rate
    #[test]
    fn test_bracket_boundary() {
        let config = TaxYearConfig::year_2024();
        let at_boundary = progressive_tax(dec("55867"), &config.federal.brackets);
        assert_eq!(at_boundary, dec("55867") * dec("0.15"));

        let just_over = progressive_tax(dec("55868"), &config.federal.brackets);
        assert_eq!(just_over, at_boundary + dec("0.205"));
    }

    /// BW-006: basic personal amount floors at zero
    #[test]
    fn test_taxable_income_floor() {
        assert_eq!(taxable_income(dec("10000"), dec("15705")), Decimal::ZERO);
        assert_eq!(taxable_income(dec("20000"), dec("15705")), dec("4295"));
        assert_eq!(taxable_income(Decimal::ZERO, dec("15705")), Decimal::ZERO);
    }

    proptest! {
        /// BW-P1: progressive tax is monotone in income for both 2024 tables
        #[test]
        fn prop_tax_monotone(a in 0u32..400_000, b in 0u32..400_000) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let config = TaxYearConfig::year_2024();
            for brackets in [&config.federal.brackets, &config.provincial.brackets] {
                let tax_low = progressive_tax(Decimal::from(low), brackets);
                let tax_high = progressive_tax(Decimal::from(high), brackets);
                prop_assert!(tax_low <= tax_high);
            }
        }

        /// BW-P2: marginal tax never exceeds income times the top rate
        #[test]
        fn prop_tax_bounded(income in 0u32..1_000_000) {
            let config = TaxYearConfig::year_2024();
            let income = Decimal::from(income);
            let tax = progressive_tax(income, &config.federal.brackets);
            prop_assert!(tax >= Decimal::ZERO);
            prop_assert!(tax <= income * dec("0.33"));
        }
    }
}
