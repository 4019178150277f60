//! Session provider port.
//!
//! Exposes the identity the auth collaborator has signed in. The core never
//! signs users in or out; it only asks who is signed in right now.

use crate::domain::foundation::{AuthError, UserId, UserSession};

/// Current signed-in user.
///
/// Synchronous: auth SDKs keep the current user in memory.
pub trait SessionProvider: Send + Sync {
    /// The signed-in user's profile, or `None` when signed out.
    fn current_session(&self) -> Option<UserSession>;

    /// The signed-in user's id, or `None` when signed out.
    fn current_user_id(&self) -> Option<UserId> {
        self.current_session().map(|session| session.id)
    }

    /// The signed-in user's profile, or `AuthError::NotSignedIn`.
    fn require_session(&self) -> Result<UserSession, AuthError> {
        self.current_session().ok_or(AuthError::NotSignedIn)
    }
}
