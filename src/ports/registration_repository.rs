//! Registration repository port.
//!
//! # Contract
//!
//! Implementations must:
//! - Reject `create` with `AlreadyRegistered` when the user already holds an
//!   active registration for the event
//! - Return `EventNotFound` from `create` when the event does not exist
//! - Return `RegistrationNotFound` from `update` when the record is gone

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventId, RegistrationId, UserId};
use crate::domain::registration::Registration;

/// Persistence for event registrations.
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Store a new registration.
    ///
    /// # Errors
    ///
    /// - `AlreadyRegistered` if an active registration exists for the pair
    /// - `EventNotFound` if the event does not exist
    /// - `StoreUnavailable` on transport failure
    async fn create(&self, registration: &Registration) -> Result<(), DomainError>;

    /// Replace an existing registration (status change, feedback).
    ///
    /// # Errors
    ///
    /// - `RegistrationNotFound` if the registration does not exist
    async fn update(&self, registration: &Registration) -> Result<(), DomainError>;

    /// Returns `None` if not found.
    async fn find(&self, id: &RegistrationId) -> Result<Option<Registration>, DomainError>;

    /// The user's non-cancelled registration for the event, if any.
    async fn find_active(
        &self,
        event_id: &EventId,
        user_id: &UserId,
    ) -> Result<Option<Registration>, DomainError>;

    /// Number of non-cancelled registrations for the event.
    async fn count_active(&self, event_id: &EventId) -> Result<u32, DomainError>;

    /// All of a user's registrations, newest first.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Registration>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn RegistrationRepository) {}
    }
}
