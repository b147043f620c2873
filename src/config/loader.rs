//! Tax-year configuration loading.
//!
//! This module provides the [`ConfigLoader`] type for loading tax-year
//! constants from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{BracketTable, ContributionRule, TaxYearConfig};

/// Loads and provides access to tax-year configuration.
///
/// The `ConfigLoader` reads a YAML configuration file, validates it, and
/// provides methods to query the year's tables and contribution rules.
///
/// # File Structure
///
/// One file per tax year:
/// ```text
/// config/tax_years/
/// ├── 2024.yaml
/// └── 2025.yaml
/// ```
///
/// Each file carries the `year`, `federal` and `provincial` bracket tables,
/// and the `pension` / `employment_insurance` contribution rules.
///
/// # Example
///
/// ```no_run
/// use longshore_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/tax_years/2024.yaml").unwrap();
/// println!("Loaded constants for tax year {}", loader.year());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TaxYearConfig,
}

impl ConfigLoader {
    /// Loads and validates a tax-year configuration file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML file (e.g., "./config/tax_years/2024.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file is not valid YAML for the expected shape (`ConfigParseError`)
    /// - The tables fail structural validation (`InvalidTaxConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: TaxYearConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the underlying tax-year configuration.
    pub fn config(&self) -> &TaxYearConfig {
        &self.config
    }

    /// Consumes the loader, yielding the validated configuration.
    pub fn into_config(self) -> TaxYearConfig {
        self.config
    }

    /// Returns the tax year the loaded constants apply to.
    pub fn year(&self) -> i32 {
        self.config.year
    }

    /// Returns the federal bracket table.
    pub fn federal(&self) -> &BracketTable {
        &self.config.federal
    }

    /// Returns the provincial bracket table.
    pub fn provincial(&self) -> &BracketTable {
        &self.config.provincial
    }

    /// Returns the pension contribution rule.
    pub fn pension(&self) -> &ContributionRule {
        &self.config.pension
    }

    /// Returns the employment-insurance contribution rule.
    pub fn employment_insurance(&self) -> &ContributionRule {
        &self.config.employment_insurance
    }
}
