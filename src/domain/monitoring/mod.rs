//! Monitoring module - backend health as shown on the admin dashboard.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Timestamp;

/// Record counts reported by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCounts {
    #[serde(default)]
    pub users: u64,
    #[serde(default)]
    pub events: u64,
    #[serde(default)]
    pub posts: u64,
    #[serde(default)]
    pub registrations: u64,
}

/// Body of `GET /system/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPayload {
    pub status: String,
    #[serde(default)]
    pub counts: EntityCounts,
    #[serde(default)]
    pub message: Option<String>,
}

/// Dashboard state of the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SystemStatus {
    /// No poll has completed yet.
    #[default]
    Unknown,
    Online {
        counts: EntityCounts,
        checked_at: Timestamp,
    },
    /// The endpoint could not be reached.
    Offline {
        reason: String,
        checked_at: Timestamp,
    },
    /// The endpoint answered, but with a failure.
    Error {
        message: String,
        checked_at: Timestamp,
    },
}

impl SystemStatus {
    /// Interprets a decoded status body.
    pub fn from_payload(payload: StatusPayload, checked_at: Timestamp) -> Self {
        if payload.status.eq_ignore_ascii_case("online") || payload.status.eq_ignore_ascii_case("ok") {
            SystemStatus::Online {
                counts: payload.counts,
                checked_at,
            }
        } else {
            SystemStatus::Error {
                message: payload
                    .message
                    .unwrap_or_else(|| format!("backend reported '{}'", payload.status)),
                checked_at,
            }
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self, SystemStatus::Online { .. })
    }

    /// Counts from the last successful poll, if this is one.
    pub fn counts(&self) -> Option<&EntityCounts> {
        match self {
            SystemStatus::Online { counts, .. } => Some(counts),
            _ => None,
        }
    }

    /// Short label for the dashboard badge.
    pub fn label(&self) -> &'static str {
        match self {
            SystemStatus::Unknown => "unknown",
            SystemStatus::Online { .. } => "online",
            SystemStatus::Offline { .. } => "offline",
            SystemStatus::Error { .. } => "error",
        }
    }

    /// True when the badge changes between `self` and `other`.
    pub fn differs_in_state(&self, other: &SystemStatus) -> bool {
        self.label() != other.label()
    }
}

impl fmt::Display for SystemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemStatus::Unknown => write!(f, "unknown"),
            SystemStatus::Online { counts, .. } => write!(
                f,
                "online ({} users, {} events, {} posts, {} registrations)",
                counts.users, counts.events, counts.posts, counts.registrations
            ),
            SystemStatus::Offline { reason, .. } => write!(f, "offline: {}", reason),
            SystemStatus::Error { message, .. } => write!(f, "error: {}", message),
        }
    }
}
