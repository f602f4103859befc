//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the subsidy
//! scheme configuration from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{CcsConfig, RateTable, SchemeMetadata};

/// Loads and provides access to the subsidy scheme configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/ccs/
/// ├── scheme.yaml   # Scheme metadata and financial year
/// └── rates.yaml    # Income thresholds, hourly caps and subsidised hours
/// ```
///
/// # Example
///
/// ```no_run
/// use ccs_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/ccs").unwrap();
/// println!("Loaded rates for {}", loader.scheme().financial_year);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: CcsConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or a missing field (`ConfigParseError`)
    /// - The rate table is internally inconsistent (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let scheme_path = path.join("scheme.yaml");
        let metadata = Self::load_yaml::<SchemeMetadata>(&scheme_path)?;

        let rates_path = path.join("rates.yaml");
        let rates = Self::load_yaml::<RateTable>(&rates_path)?;
        Self::check_rates(&rates).map_err(|message| EngineError::ConfigParseError {
            path: rates_path.display().to_string(),
            message,
        })?;

        Ok(Self {
            config: CcsConfig::new(metadata, rates),
        })
    }

    /// Creates a loader around the built-in 2024-25 configuration.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Rejects rate tables the calculator cannot work with.
    fn check_rates(rates: &RateTable) -> Result<(), String> {
        let thresholds = &rates.income_thresholds;
        if thresholds.lower < Decimal::ZERO || thresholds.upper < thresholds.lower {
            return Err("income thresholds must satisfy 0 <= lower <= upper".to_string());
        }
        if thresholds.taper_step <= Decimal::ZERO {
            return Err("taper_step must be greater than zero".to_string());
        }
        if thresholds.min_subsidy_percentage > thresholds.max_subsidy_percentage {
            return Err("min_subsidy_percentage cannot exceed max_subsidy_percentage".to_string());
        }
        let caps = &rates.hourly_caps;
        let all_caps = [
            caps.long_day_care,
            caps.family_day_care,
            caps.outside_school_hours_care,
            caps.in_home_care,
            caps.occasional_care,
        ];
        if all_caps.iter().any(|cap| *cap <= Decimal::ZERO) {
            return Err("hourly caps must be greater than zero".to_string());
        }
        Ok(())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &CcsConfig {
        &self.config
    }

    /// Returns the scheme metadata.
    pub fn scheme(&self) -> &SchemeMetadata {
        self.config.scheme()
    }

    /// Returns the rate table.
    pub fn rates(&self) -> &RateTable {
        self.config.rates()
    }
}
