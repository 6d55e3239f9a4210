//! Intake configuration

use std::collections::HashMap;

use core_kernel::CoreError;
use serde::Deserialize;

/// How the final information summary is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    /// One `Label: value ✓` line per field
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Intake configuration
#[derive(Debug, Clone, Deserialize)]
pub struct IntakeConfig {
    /// Attempts allowed per field before the session is aborted
    pub max_attempts: u32,
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Summary rendering
    pub summary_format: SummaryFormat,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            log_level: "warn".to_string(),
            summary_format: SummaryFormat::Text,
        }
    }
}

impl IntakeConfig {
    /// Loads configuration from `INTAKE_`-prefixed environment variables
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Configuration` if a variable cannot be parsed or
    /// the resulting configuration is invalid
    pub fn from_env() -> Result<Self, CoreError> {
        Self::load(config::Environment::with_prefix("INTAKE"))
    }

    /// Loads configuration from an explicit set of variables instead of the
    /// process environment
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, CoreError> {
        Self::load(config::Environment::with_prefix("INTAKE").source(Some(vars)))
    }

    fn load(environment: config::Environment) -> Result<Self, CoreError> {
        let defaults = Self::default();

        let config: Self = config::Config::builder()
            .set_default("max_attempts", i64::from(defaults.max_attempts))
            .and_then(|builder| builder.set_default("log_level", defaults.log_level))
            .and_then(|builder| builder.set_default("summary_format", "text"))
            .map_err(|e| CoreError::configuration(e.to_string()))?
            .add_source(environment.try_parsing(true))
            .build()
            .and_then(|built| built.try_deserialize())
            .map_err(|e| CoreError::configuration(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Checks the configured values
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Configuration` when `max_attempts` is zero or the
    /// log level is blank
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.max_attempts == 0 {
            return Err(CoreError::configuration(
                "max_attempts must be at least 1",
            ));
        }
        if self.log_level.trim().is_empty() {
            return Err(CoreError::configuration("log_level must not be empty"));
        }
        Ok(())
    }
}
