//! Tax breakdown composition and partial-year projection.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::TaxYearConfig;

use super::brackets::{progressive_tax, taxable_income};
use super::contributions::capped_contribution;

/// Cap on projected annual work days.
///
/// Approximates the maximum plausible number of paid days in a year; the
/// projection never extrapolates past it.
pub const PROJECTION_WORK_DAY_CAP: u32 = 260;

/// Calendar days per year as used by the projection.
pub const DAYS_PER_YEAR: i64 = 365;

/// A complete deduction breakdown for an annual income figure.
///
/// A pure derived value, never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// The gross annual income the breakdown was computed from.
    pub gross_income: Decimal,
    /// Federal tax after the federal basic personal amount.
    pub federal_tax: Decimal,
    /// Provincial tax after the provincial basic personal amount.
    pub provincial_tax: Decimal,
    /// Capped pension contribution (CPP).
    pub pension: Decimal,
    /// Capped employment-insurance premium (EI).
    pub employment_insurance: Decimal,
    /// Sum of all four deductions.
    pub total_deductions: Decimal,
    /// Gross income less total deductions.
    pub net_income: Decimal,
    /// Total deductions as a percentage of gross (0 when gross is 0).
    pub effective_rate: Decimal,
}

/// Applies one tax year's constants to annual income figures.
///
/// # Example
///
/// ```
/// use longshore_engine::tax::TaxEngine;
/// use rust_decimal::Decimal;
///
/// let engine = TaxEngine::new_2024();
/// let breakdown = engine.tax_breakdown(Decimal::from(60_000));
/// assert!(breakdown.net_income < breakdown.gross_income);
/// ```
#[derive(Debug, Clone)]
pub struct TaxEngine {
    config: TaxYearConfig,
}

impl TaxEngine {
    /// Creates an engine over an already-validated tax-year configuration.
    pub fn new(config: TaxYearConfig) -> Self {
        Self { config }
    }

    /// Creates an engine with the compiled-in 2024 constants.
    pub fn new_2024() -> Self {
        Self::new(TaxYearConfig::year_2024())
    }

    /// The tax year this engine applies.
    pub fn year(&self) -> i32 {
        self.config.year
    }

    /// Federal tax on annual income, after the federal basic personal
    /// amount.
    pub fn federal_tax(&self, annual_income: Decimal) -> Decimal {
        let taxable = taxable_income(annual_income, self.config.federal.basic_personal_amount);
        progressive_tax(taxable, &self.config.federal.brackets)
    }

    /// Provincial tax on annual income, after the provincial basic personal
    /// amount.
    pub fn provincial_tax(&self, annual_income: Decimal) -> Decimal {
        let taxable = taxable_income(annual_income, self.config.provincial.basic_personal_amount);
        progressive_tax(taxable, &self.config.provincial.brackets)
    }

    /// The capped pension contribution on annual income.
    pub fn pension_contribution(&self, annual_income: Decimal) -> Decimal {
        capped_contribution(annual_income, &self.config.pension)
    }

    /// The capped employment-insurance premium on annual income.
    pub fn employment_insurance_premium(&self, annual_income: Decimal) -> Decimal {
        capped_contribution(annual_income, &self.config.employment_insurance)
    }

    /// Composes the full deduction breakdown for an annual income figure.
    pub fn tax_breakdown(&self, annual_income: Decimal) -> TaxBreakdown {
        let federal_tax = self.federal_tax(annual_income);
        let provincial_tax = self.provincial_tax(annual_income);
        let pension = self.pension_contribution(annual_income);
        let employment_insurance = self.employment_insurance_premium(annual_income);

        let total_deductions = federal_tax + provincial_tax + pension + employment_insurance;
        let net_income = annual_income - total_deductions;
        let effective_rate = if annual_income > Decimal::ZERO {
            total_deductions / annual_income * Decimal::from(100)
        } else {
            Decimal::ZERO
        };

        TaxBreakdown {
            gross_income: annual_income,
            federal_tax,
            provincial_tax,
            pension,
            employment_insurance,
            total_deductions,
            net_income,
            effective_rate,
        }
    }

    /// Projects an annual breakdown from year-to-date earnings.
    ///
    /// Average daily earnings are extrapolated over the year's pace, with
    /// projected work days capped at [`PROJECTION_WORK_DAY_CAP`]. Days
    /// elapsed counts January 1 through the reference date inclusive.
    /// Returns `None` when no days have been worked.
    pub fn project_annual(
        &self,
        ytd_earnings: Decimal,
        days_worked: u32,
        reference: NaiveDate,
    ) -> Option<TaxBreakdown> {
        if days_worked == 0 {
            return None;
        }

        let start_of_year =
            NaiveDate::from_ymd_opt(reference.year(), 1, 1).expect("Jan 1 exists");
        let days_elapsed = (reference - start_of_year).num_days() + 1;

        let average_daily = ytd_earnings / Decimal::from(days_worked);
        let projected_days = (Decimal::from(days_worked) * Decimal::from(DAYS_PER_YEAR)
            / Decimal::from(days_elapsed))
        .min(Decimal::from(PROJECTION_WORK_DAY_CAP));
        let projected_annual = average_daily * projected_days;

        Some(self.tax_breakdown(projected_annual))
    }
}
