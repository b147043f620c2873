//! Tax-year configuration types.
//!
//! These structures are either built from the compiled-in constants or
//! deserialized from YAML configuration files, and are validated before use.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// A single marginal tax bracket.
///
/// Brackets are half-open: the lower bound is inclusive, the upper bound
/// exclusive. The final bracket of a table has no upper bound.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxBracket {
    /// The lower bound of the bracket (inclusive).
    pub lower: Decimal,
    /// The upper bound of the bracket (exclusive); `None` means unbounded.
    #[serde(default)]
    pub upper: Option<Decimal>,
    /// The marginal rate applied within the bracket.
    pub rate: Decimal,
}

impl TaxBracket {
    /// Returns the width of the bracket, or `None` for the unbounded bracket.
    pub fn width(&self) -> Option<Decimal> {
        self.upper.map(|upper| upper - self.lower)
    }
}

/// A jurisdiction's progressive bracket table plus its basic personal amount.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BracketTable {
    /// Income excluded before bracket application.
    pub basic_personal_amount: Decimal,
    /// Brackets in ascending order, jointly covering `[0, infinity)`.
    pub brackets: Vec<TaxBracket>,
}

impl BracketTable {
    /// Validates the structural invariants of the table.
    ///
    /// Brackets must start at zero, be contiguous and non-overlapping, carry
    /// strictly increasing rates, and end with a single unbounded bracket.
    pub fn validate(&self) -> EngineResult<()> {
        let Some(first) = self.brackets.first() else {
            return Err(EngineError::InvalidTaxConfig {
                message: "bracket table is empty".to_string(),
            });
        };
        if first.lower != Decimal::ZERO {
            return Err(EngineError::InvalidTaxConfig {
                message: format!("first bracket starts at {}, not 0", first.lower),
            });
        }

        for pair in self.brackets.windows(2) {
            let (current, next) = (&pair[0], &pair[1]);
            match current.upper {
                Some(upper) if upper == next.lower => {}
                Some(upper) => {
                    return Err(EngineError::InvalidTaxConfig {
                        message: format!(
                            "brackets are not contiguous: {} followed by {}",
                            upper, next.lower
                        ),
                    });
                }
                None => {
                    return Err(EngineError::InvalidTaxConfig {
                        message: "unbounded bracket is not last".to_string(),
                    });
                }
            }
            if next.rate <= current.rate {
                return Err(EngineError::InvalidTaxConfig {
                    message: format!(
                        "bracket rates must increase: {} followed by {}",
                        current.rate, next.rate
                    ),
                });
            }
        }

        let last = self.brackets.last().expect("table checked non-empty");
        if last.upper.is_some() {
            return Err(EngineError::InvalidTaxConfig {
                message: "final bracket must be unbounded".to_string(),
            });
        }
        if self.basic_personal_amount < Decimal::ZERO {
            return Err(EngineError::InvalidTaxConfig {
                message: "basic personal amount is negative".to_string(),
            });
        }
        Ok(())
    }
}

/// A capped flat-rate social-insurance contribution scheme.
///
/// The same formula serves both schemes; only the constants differ. The
/// pension scheme carries a basic exemption, the employment-insurance
/// scheme does not (its exemption is zero).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContributionRule {
    /// The flat contribution rate.
    pub rate: Decimal,
    /// Earnings excluded before the rate is applied.
    pub basic_exemption: Decimal,
    /// Maximum pensionable/insurable earnings.
    pub earnings_ceiling: Decimal,
    /// Maximum annual contribution.
    pub contribution_ceiling: Decimal,
}

impl ContributionRule {
    /// Validates the rule's constants.
    pub fn validate(&self) -> EngineResult<()> {
        if self.rate < Decimal::ZERO
            || self.basic_exemption < Decimal::ZERO
            || self.earnings_ceiling < Decimal::ZERO
            || self.contribution_ceiling < Decimal::ZERO
        {
            return Err(EngineError::InvalidTaxConfig {
                message: "contribution rule constants must be non-negative".to_string(),
            });
        }
        Ok(())
    }
}

/// The complete constants for one tax year.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxYearConfig {
    /// The tax year these constants apply to.
    pub year: i32,
    /// Federal bracket table and basic personal amount.
    pub federal: BracketTable,
    /// Provincial bracket table and basic personal amount.
    pub provincial: BracketTable,
    /// The pension contribution scheme (CPP).
    pub pension: ContributionRule,
    /// The employment-insurance premium scheme (EI).
    pub employment_insurance: ContributionRule,
}

impl TaxYearConfig {
    /// Returns the compiled-in 2024 constants.
    pub fn year_2024() -> Self {
        super::builtin::year_2024()
    }

    /// Validates both bracket tables and both contribution rules.
    pub fn validate(&self) -> EngineResult<()> {
        self.federal.validate()?;
        self.provincial.validate()?;
        self.pension.validate()?;
        self.employment_insurance.validate()?;
        Ok(())
    }
}
