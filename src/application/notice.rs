//! User-visible notices (toasts/snackbars) derived from application errors.
//!
//! Nothing in the application layer is fatal: every failure becomes a notice
//! and control returns to the UI with prior confirmed state intact.

use serde::Serialize;

use crate::domain::engagement::EngagementError;
use crate::domain::registration::RegistrationError;

/// How alarming the notice should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    /// The action already happened or can no longer happen.
    Info,
    /// The action failed and may be retried by the user.
    Error,
}

/// A transient message for the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserNotice {
    pub level: NoticeLevel,
    pub message: String,
}

impl UserNotice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl From<&RegistrationError> for UserNotice {
    fn from(err: &RegistrationError) -> Self {
        if err.is_informational() {
            UserNotice::info(err.to_string())
        } else {
            UserNotice::error(err.to_string())
        }
    }
}

impl From<&EngagementError> for UserNotice {
    fn from(err: &EngagementError) -> Self {
        if err.is_informational() {
            UserNotice::info(err.to_string())
        } else {
            UserNotice::error(err.to_string())
        }
    }
}
