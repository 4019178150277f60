//! CancelRegistrationHandler - Command handler for cancelling a registration.

use std::sync::Arc;

use crate::domain::foundation::RegistrationId;
use crate::domain::registration::{Registration, RegistrationError};
use crate::ports::{RegistrationRepository, SessionProvider};

/// Command to cancel one of the signed-in user's registrations.
#[derive(Debug, Clone, Copy)]
pub struct CancelRegistrationCommand {
    pub registration_id: RegistrationId,
}

/// Result of successful cancellation.
#[derive(Debug, Clone)]
pub struct CancelRegistrationResult {
    pub registration: Registration,
}

/// Handler for cancelling registrations.
///
/// A cancelled registration frees its seat immediately. Someone else's
/// registration reads as not found.
pub struct CancelRegistrationHandler {
    registrations: Arc<dyn RegistrationRepository>,
    sessions: Arc<dyn SessionProvider>,
}

impl CancelRegistrationHandler {
    pub fn new(
        registrations: Arc<dyn RegistrationRepository>,
        sessions: Arc<dyn SessionProvider>,
    ) -> Self {
        Self {
            registrations,
            sessions,
        }
    }

    pub async fn handle(
        &self,
        cmd: CancelRegistrationCommand,
    ) -> Result<CancelRegistrationResult, RegistrationError> {
        let user_id = self
            .sessions
            .current_user_id()
            .ok_or(RegistrationError::NotSignedIn)?;

        // 1. Find the user's registration
        let mut registration = self
            .registrations
            .find(&cmd.registration_id)
            .await
            .map_err(|e| RegistrationError::from_store_for_registration(cmd.registration_id, e))?
            .filter(|r| r.user_id == user_id)
            .ok_or(RegistrationError::RegistrationNotFound(cmd.registration_id))?;

        // 2. Cancel (domain logic)
        registration.cancel()?;

        // 3. Persist the update
        self.registrations
            .update(&registration)
            .await
            .map_err(|e| RegistrationError::from_store_for_registration(cmd.registration_id, e))?;

        tracing::info!(
            registration_id = %registration.id,
            event_id = %registration.event_id,
            "registration cancelled"
        );

        Ok(CancelRegistrationResult { registration })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryStore, StaticSessionProvider};
    use crate::domain::event::Event;
    use crate::domain::foundation::{EventId, Timestamp, UserId, UserSession};
    use crate::domain::registration::RegistrationStatus;

    fn session(id: &str) -> UserSession {
        UserSession::new(UserId::new(id).unwrap(), format!("{id}@campus.edu"), None)
    }

    async fn seeded(store: &InMemoryStore, user: &str) -> Registration {
        let event = Event::new("Career Fair", "Meet employers", "career", Timestamp::now().add_days(3)).unwrap();
        let event_id: EventId = event.id;
        store.put_event(event).await;
        let registration = Registration::confirmed(event_id, &session(user));
        store.create(&registration).await.unwrap();
        registration
    }

    fn handler(store: &Arc<InMemoryStore>, user: &str) -> CancelRegistrationHandler {
        CancelRegistrationHandler::new(
            store.clone(),
            Arc::new(StaticSessionProvider::signed_in(session(user))),
        )
    }

    #[tokio::test]
    async fn cancels_and_frees_the_seat() {
        let store = Arc::new(InMemoryStore::new());
        let registration = seeded(&store, "u1").await;

        let result = handler(&store, "u1")
            .handle(CancelRegistrationCommand { registration_id: registration.id })
            .await
            .unwrap();

        assert_eq!(result.registration.status, RegistrationStatus::Cancelled);
        assert_eq!(store.count_active(&registration.event_id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn cancelling_twice_is_informational() {
        let store = Arc::new(InMemoryStore::new());
        let registration = seeded(&store, "u1").await;
        let handler = handler(&store, "u1");
        let cmd = CancelRegistrationCommand { registration_id: registration.id };

        handler.handle(cmd).await.unwrap();
        let err = handler.handle(cmd).await.unwrap_err();

        assert_eq!(err, RegistrationError::AlreadyCancelled(registration.id));
        assert!(err.is_informational());
    }

    #[tokio::test]
    async fn another_users_registration_is_not_found() {
        let store = Arc::new(InMemoryStore::new());
        let registration = seeded(&store, "u1").await;

        let err = handler(&store, "intruder")
            .handle(CancelRegistrationCommand { registration_id: registration.id })
            .await
            .unwrap_err();

        assert_eq!(err, RegistrationError::RegistrationNotFound(registration.id));
        assert_eq!(store.count_active(&registration.event_id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn missing_registration_is_not_found() {
        let store = Arc::new(InMemoryStore::new());
        let registration_id = RegistrationId::new();

        let err = handler(&store, "u1")
            .handle(CancelRegistrationCommand { registration_id })
            .await
            .unwrap_err();

        assert_eq!(err, RegistrationError::RegistrationNotFound(registration_id));
    }
}
