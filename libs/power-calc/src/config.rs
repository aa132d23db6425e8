//! Calculator configuration
//!
//! Layered with figment: built-in defaults, then an optional YAML file, then
//! `POWCALC_*` environment variables. Later layers win.

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{CalcError, Result};
use crate::validator::DEFAULT_INTEGER_TOLERANCE;

/// Environment variable prefix, e.g. `POWCALC_INTEGER_TOLERANCE`
pub const ENV_PREFIX: &str = "POWCALC_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcConfig {
    /// Distance from the nearest integer under which an exponent is treated
    /// as an integer
    #[serde(default = "default_integer_tolerance")]
    pub integer_tolerance: f64,

    /// Record completed calculations in the history ledger
    #[serde(default = "default_true")]
    pub record_history: bool,
}

fn default_integer_tolerance() -> f64 {
    DEFAULT_INTEGER_TOLERANCE
}

fn default_true() -> bool {
    true
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            integer_tolerance: default_integer_tolerance(),
            record_history: true,
        }
    }
}

impl CalcConfig {
    /// Load configuration from defaults, an optional YAML file and the
    /// environment
    ///
    /// # Arguments
    /// * `path` - YAML file; must exist when given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.exists() {
                return Err(CalcError::config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            figment = figment.merge(Yaml::file(path));
        }

        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| CalcError::config(e.to_string()))?;

        config.validate()?;
        debug!(
            integer_tolerance = config.integer_tolerance,
            record_history = config.record_history,
            "Configuration loaded"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let tolerance = self.integer_tolerance;
        if !tolerance.is_finite() {
            return Err(CalcError::invalid_config(
                "integer_tolerance",
                "must be a finite number",
            ));
        }
        if tolerance < 0.0 {
            return Err(CalcError::invalid_config(
                "integer_tolerance",
                format!("must not be negative (got {})", tolerance),
            ));
        }
        // 0.5 or more would treat every exponent as an integer
        if tolerance >= 0.5 {
            return Err(CalcError::invalid_config(
                "integer_tolerance",
                format!("must be below 0.5 (got {})", tolerance),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;
    use figment::Jail;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CalcConfig::default();
        assert_eq!(config.integer_tolerance, 1e-9);
        assert!(config.record_history);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_tolerance() {
        for tolerance in [-1e-9, 0.5, 2.0, f64::NAN, f64::INFINITY] {
            let config = CalcConfig {
                integer_tolerance: tolerance,
                ..Default::default()
            };
            let err = config.validate().unwrap_err();
            assert!(matches!(err, CalcError::InvalidConfig { ref field, .. } if field == "integer_tolerance"));
        }
    }

    #[test]
    fn test_zero_tolerance_is_valid() {
        let config = CalcConfig {
            integer_tolerance: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_yaml_file() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
            writeln!(file, "integer_tolerance: 1.0e-6").unwrap();
            writeln!(file, "record_history: false").unwrap();

            let config = CalcConfig::load(Some(file.path())).unwrap();
            assert_eq!(config.integer_tolerance, 1e-6);
            assert!(!config.record_history);
            Ok(())
        });
    }

    #[test]
    fn test_load_partial_yaml_keeps_defaults() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
            writeln!(file, "record_history: false").unwrap();

            let config = CalcConfig::load(Some(file.path())).unwrap();
            assert_eq!(config.integer_tolerance, DEFAULT_INTEGER_TOLERANCE);
            assert!(!config.record_history);
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
            writeln!(file, "integer_tolerance: 0.75").unwrap();

            let err = CalcConfig::load(Some(file.path())).unwrap_err();
            assert!(matches!(err, CalcError::InvalidConfig { .. }));
            Ok(())
        });
    }

    #[test]
    fn test_load_missing_file() {
        let err = CalcConfig::load(Some(Path::new("/nonexistent/powcalc.yaml"))).unwrap_err();
        assert!(matches!(err, CalcError::Config(_)));
    }

    #[test]
    fn test_env_overrides_yaml() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file(
                "powcalc.yaml",
                "integer_tolerance: 0.001\nrecord_history: true\n",
            )?;
            jail.set_env("POWCALC_RECORD_HISTORY", "false");
            jail.set_env("POWCALC_INTEGER_TOLERANCE", "0.000001");

            let config = CalcConfig::load(Some(Path::new("powcalc.yaml"))).unwrap();
            assert!(!config.record_history);
            assert_eq!(config.integer_tolerance, 0.000001);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("POWCALC_RECORD_HISTORY", "false");

            let config = CalcConfig::load(None).unwrap();
            assert!(!config.record_history);
            assert_eq!(config.integer_tolerance, DEFAULT_INTEGER_TOLERANCE);
            Ok(())
        });
    }

    #[test]
    fn test_env_tolerance_is_validated() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("POWCALC_INTEGER_TOLERANCE", "0.75");

            let err = CalcConfig::load(None).unwrap_err();
            assert!(matches!(err, CalcError::InvalidConfig { ref field, .. } if field == "integer_tolerance"));
            Ok(())
        });
    }

    #[test]
    fn test_env_unparsable_value() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("POWCALC_INTEGER_TOLERANCE", "tiny");

            let err = CalcConfig::load(None).unwrap_err();
            assert!(matches!(err, CalcError::Config(_)));
            Ok(())
        });
    }
}
