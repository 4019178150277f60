//! Authentication types for the domain layer.
//!
//! The auth collaborator (Firebase, Supabase, ...) owns sign-in. The core only
//! ever sees the signed-in identity through [`UserSession`], which it treats
//! as read-only.

use super::UserId;
use thiserror::Error;

/// The signed-in user as reported by the auth collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSession {
    /// The unique user identifier from the auth provider.
    pub id: UserId,

    /// User's email address.
    pub email: String,

    /// Display name if the profile has one.
    pub display_name: Option<String>,
}

impl UserSession {
    pub fn new(id: UserId, email: impl Into<String>, display_name: Option<String>) -> Self {
        Self {
            id,
            email: email.into(),
            display_name,
        }
    }

    /// Returns the user's display name, or email as fallback.
    pub fn display_name_or_email(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

/// Failures reported by the auth collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Nobody is signed in.
    #[error("Not signed in")]
    NotSignedIn,

    /// The auth service could not be reached.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_preferred_over_email() {
        let session = UserSession::new(
            UserId::new("u1").unwrap(),
            "ada@campus.edu",
            Some("Ada".to_string()),
        );
        assert_eq!(session.display_name_or_email(), "Ada");
    }

    #[test]
    fn email_used_without_display_name() {
        let session = UserSession::new(UserId::new("u1").unwrap(), "ada@campus.edu", None);
        assert_eq!(session.display_name_or_email(), "ada@campus.edu");
    }
}
