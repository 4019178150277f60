//! Status monitor configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Status monitor configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorConfig {
    /// Backend base URL; the monitor polls `{base_url}/system/status`
    pub base_url: String,

    /// Seconds between status checks
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl MonitorConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            poll_interval_secs: default_poll_interval(),
            request_timeout_secs: default_request_timeout(),
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn uses_https(&self) -> bool {
        self.base_url.starts_with("https://")
    }

    /// Validate monitor configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("monitor.base_url"));
        }
        if !self.base_url.starts_with("http://") && !self.uses_https() {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.poll_interval_secs == 0 || self.poll_interval_secs > 3600 {
            return Err(ValidationError::InvalidPollInterval);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.request_timeout_secs > self.poll_interval_secs {
            return Err(ValidationError::TimeoutExceedsInterval);
        }
        Ok(())
    }
}

fn default_poll_interval() -> u64 {
    30
}

fn default_request_timeout() -> u64 {
    10
}
