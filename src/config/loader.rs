//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading agreement
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::calculation::parse_hhmm;
use crate::error::{EngineError, EngineResult};

use super::types::{AgreementMetadata, EngineConfig, LimitsConfig, RatesConfig};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/idcc_1760/
/// ├── agreement.yaml  # Agreement metadata
/// ├── limits.yaml     # Daily/weekly limits, break rule, night window
/// └── rates.yaml      # Premiums, overtime brackets, monthly divisors
/// ```
///
/// # Example
///
/// ```no_run
/// use jardinerie_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/idcc_1760")?;
/// println!("Loaded agreement: {}", loader.config().agreement().name);
/// # Ok::<(), jardinerie_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML or misses a required field
    /// - The night window is not made of "HH:MM" times
    /// - The overtime rates or boundary are inconsistent
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let agreement = Self::load_yaml::<AgreementMetadata>(&path.join("agreement.yaml"))?;
        let limits = Self::load_yaml::<LimitsConfig>(&path.join("limits.yaml"))?;
        let rates = Self::load_yaml::<RatesConfig>(&path.join("rates.yaml"))?;

        let config = EngineConfig::new(agreement, limits, rates);
        Self::validate(&config)?;

        info!(
            code = %config.agreement().code,
            version = %config.agreement().version,
            "Loaded agreement configuration"
        );

        Ok(Self { config })
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

    /// Checks the invariants the calculation code relies on.
    pub fn validate(config: &EngineConfig) -> EngineResult<()> {
        let window = &config.limits().night_window;
        for (field, value) in [
            ("night_window.start", &window.start),
            ("night_window.end", &window.end),
        ] {
            if parse_hhmm(value).is_none() {
                return Err(EngineError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("expected an HH:MM time, got '{}'", value),
                });
            }
        }

        let overtime = config.overtime();
        if overtime.first_bracket_rate > overtime.second_bracket_rate {
            return Err(EngineError::InvalidConfig {
                field: "overtime.second_bracket_rate".to_string(),
                message: "brackets must be ordered by ascending rate".to_string(),
            });
        }

        // The first bracket must keep a non-negative width for the 39h regime.
        if overtime.bracket_boundary_hours < rust_decimal::Decimal::from(39) {
            return Err(EngineError::InvalidConfig {
                field: "overtime.bracket_boundary_hours".to_string(),
                message: format!(
                    "must be at least 39, got {}",
                    overtime.bracket_boundary_hours
                ),
            });
        }

        Ok(())
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> EngineConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/idcc_1760"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config().agreement().code, "IDCC1760");
    }

    #[test]
    fn test_shipped_yaml_matches_default() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.into_config(), EngineConfig::default());
    }

    #[test]
    fn test_loaded_limits() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let limits = loader.config().limits();

        assert_eq!(limits.daily_max_hours, dec("10"));
        assert_eq!(limits.weekly_max_hours, dec("48"));
        assert_eq!(limits.average_weekly_max_hours, dec("44"));
        assert_eq!(limits.mandatory_break_minutes, 20);
        assert_eq!(limits.night_window.start, "21:00");
        assert_eq!(limits.night_window.end, "06:00");
    }

    #[test]
    fn test_loaded_monthly_divisors() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let monthly = &loader.config().rates().monthly_hours;

        assert_eq!(monthly.get(&35), Some(&dec("151.67")));
        assert_eq!(monthly.get(&39), Some(&dec("169.00")));
        assert_eq!(monthly.get(&24), Some(&dec("104.00")));
        assert_eq!(monthly.get(&32), Some(&dec("138.67")));
    }

    #[test]
    fn test_missing_directory_returns_config_not_found() {
        let result = ConfigLoader::load("./config/does_not_exist");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.ends_with("agreement.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_malformed_night_window() {
        let mut limits = EngineConfig::default().limits().clone();
        limits.night_window.start = "9pm".to_string();
        let config = EngineConfig::default().with_limits(limits);

        match ConfigLoader::validate(&config) {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "night_window.start");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_descending_brackets() {
        let mut rates = EngineConfig::default().rates().clone();
        rates.overtime.first_bracket_rate = dec("1.75");
        let config = EngineConfig::default().with_rates(rates);

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(EngineError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_boundary_below_39() {
        let mut rates = EngineConfig::default().rates().clone();
        rates.overtime.bracket_boundary_hours = dec("38");
        let config = EngineConfig::default().with_rates(rates);

        assert!(ConfigLoader::validate(&config).is_err());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigLoader::validate(&EngineConfig::default()).is_ok());
    }
}
