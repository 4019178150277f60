//! Status source port: where the monitor reads backend health from.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::monitoring::StatusPayload;

/// Failures fetching the status endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    /// Connection refused, DNS failure, timeout.
    #[error("status endpoint unreachable: {0}")]
    Unreachable(String),

    /// The endpoint answered with a non-success status code.
    #[error("status endpoint returned HTTP {0}")]
    Http(u16),

    /// The body was not a status document.
    #[error("could not decode status body: {0}")]
    Decode(String),
}

/// One-shot status fetch.
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch_status(&self) -> Result<StatusPayload, StatusError>;
}
