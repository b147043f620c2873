//! Compiled-in tax-year constants.
//!
//! 2024 federal and BC provincial brackets, basic personal amounts, and the
//! CPP/EI constants. New years are added here or supplied as YAML files via
//! [`crate::config::ConfigLoader`].

use rust_decimal::Decimal;

use super::types::{BracketTable, ContributionRule, TaxBracket, TaxYearConfig};

fn bracket(lower: i64, upper: Option<i64>, rate_mantissa: i64, rate_scale: u32) -> TaxBracket {
    TaxBracket {
        lower: Decimal::from(lower),
        upper: upper.map(Decimal::from),
        rate: Decimal::new(rate_mantissa, rate_scale),
    }
}

/// The 2024 tax-year constants (federal + BC).
pub fn year_2024() -> TaxYearConfig {
    TaxYearConfig {
        year: 2024,
        federal: BracketTable {
            basic_personal_amount: Decimal::from(15_705),
            brackets: vec![
                bracket(0, Some(55_867), 15, 2),
                bracket(55_867, Some(111_733), 205, 3),
                bracket(111_733, Some(173_205), 26, 2),
                bracket(173_205, Some(246_752), 29, 2),
                bracket(246_752, None, 33, 2),
            ],
        },
        provincial: BracketTable {
            basic_personal_amount: Decimal::from(12_580),
            brackets: vec![
                bracket(0, Some(47_937), 506, 4),
                bracket(47_937, Some(95_875), 77, 3),
                bracket(95_875, Some(110_076), 105, 3),
                bracket(110_076, Some(133_664), 1229, 4),
                bracket(133_664, Some(181_232), 147, 3),
                bracket(181_232, None, 205, 3),
            ],
        },
        pension: ContributionRule {
            rate: Decimal::new(595, 4),
            basic_exemption: Decimal::from(3_500),
            earnings_ceiling: Decimal::from(68_500),
            contribution_ceiling: Decimal::new(386_750, 2),
        },
        employment_insurance: ContributionRule {
            rate: Decimal::new(163, 4),
            basic_exemption: Decimal::ZERO,
            earnings_ceiling: Decimal::from(63_200),
            contribution_ceiling: Decimal::new(103_016, 2),
        },
    }
}
