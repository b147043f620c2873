//! Tax-year configuration for the engine.
//!
//! Bracket tables, contribution rules, and basic personal amounts never
//! change within a tax year; they are versioned by year. The engine ships
//! with compiled-in 2024 constants and can load other years from YAML files.
//!
//! # Example
//!
//! ```
//! use longshore_engine::config::TaxYearConfig;
//!
//! let config = TaxYearConfig::year_2024();
//! assert_eq!(config.year, 2024);
//! config.validate().unwrap();
//! ```

mod builtin;
mod loader;
mod types;

pub use builtin::year_2024;
pub use loader::ConfigLoader;
pub use types::{BracketTable, ContributionRule, TaxBracket, TaxYearConfig};
