//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid monitor base URL: must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("Monitor base URL must use HTTPS in production")]
    BaseUrlMustBeHttps,

    #[error("Poll interval must be between 1 and 3600 seconds")]
    InvalidPollInterval,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Request timeout must not exceed the poll interval")]
    TimeoutExceedsInterval,

    #[error("Log level filter is empty")]
    EmptyLogLevel,
}
