//! Progressive tax and capped social-insurance estimation.
//!
//! Applies marginal bracket taxation and the two capped contribution
//! schemes to an annual (or annualized) income figure, and projects an
//! annual figure from partial-year earnings.

mod brackets;
mod contributions;
mod engine;

pub use brackets::{progressive_tax, taxable_income};
pub use contributions::capped_contribution;
pub use engine::{DAYS_PER_YEAR, PROJECTION_WORK_DAY_CAP, TaxBreakdown, TaxEngine};
