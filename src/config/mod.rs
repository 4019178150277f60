//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TALENT_HUB` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use talent_hub::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Polling {} every {:?}", config.monitor.base_url, config.monitor.poll_interval());
//! ```

mod error;
mod logging;
mod monitor;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use monitor::MonitorConfig;

use serde::Deserialize;

/// Deployment environment
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub environment: Environment,

    /// Status monitor (backend URL, poll interval)
    pub monitor: MonitorConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TALENT_HUB` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TALENT_HUB__MONITOR__BASE_URL=https://api.campus.edu` -> `monitor.base_url`
    /// - `TALENT_HUB__MONITOR__POLL_INTERVAL_SECS=30` -> `monitor.poll_interval_secs`
    /// - `TALENT_HUB__LOGGING__JSON=true` -> `logging.json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TALENT_HUB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.monitor.validate()?;
        self.logging.validate()?;
        if self.is_production() && !self.monitor.uses_https() {
            return Err(ValidationError::BaseUrlMustBeHttps);
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}
