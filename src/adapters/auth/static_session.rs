//! Session provider backed by an in-process slot.
//!
//! The hosted auth SDK keeps the signed-in user in memory and notifies on
//! change; this adapter models that with a lock-protected `Option`. Tests and
//! demos call [`StaticSessionProvider::sign_in`] / [`sign_out`] directly.
//!
//! [`sign_out`]: StaticSessionProvider::sign_out

use std::sync::{RwLock, RwLockWriteGuard};

use crate::domain::foundation::{UserId, UserSession};
use crate::ports::SessionProvider;

/// Holds at most one signed-in user.
#[derive(Debug, Default)]
pub struct StaticSessionProvider {
    session: RwLock<Option<UserSession>>,
}

impl StaticSessionProvider {
    /// Starts signed out.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts signed in as `session`.
    pub fn signed_in(session: UserSession) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }

    pub fn sign_in(&self, session: UserSession) {
        tracing::debug!(user_id = %session.id, "session started");
        *self.slot() = Some(session);
    }

    pub fn sign_out(&self) {
        if let Some(previous) = self.slot().take() {
            tracing::debug!(user_id = %previous.id, "session ended");
        }
    }

    /// Write access to the slot. A writer that panicked earlier leaves the
    /// lock poisoned; the next sign-in or sign-out overwrites whatever it
    /// left and clears the poison.
    fn slot(&self) -> RwLockWriteGuard<'_, Option<UserSession>> {
        match self.session.write() {
            Ok(slot) => slot,
            Err(poisoned) => {
                tracing::warn!("session slot was poisoned, recovering");
                self.session.clear_poison();
                poisoned.into_inner()
            }
        }
    }
}

impl SessionProvider for StaticSessionProvider {
    fn current_session(&self) -> Option<UserSession> {
        // A poisoned slot reads as signed out until the next sign-in or sign-out.
        self.session.read().ok().and_then(|slot| slot.clone())
    }

    fn current_user_id(&self) -> Option<UserId> {
        self.session
            .read()
            .ok()
            .and_then(|slot| slot.as_ref().map(|s| s.id.clone()))
    }
}
