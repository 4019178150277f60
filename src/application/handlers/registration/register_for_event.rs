//! RegisterForEventHandler - Command handler for registering the signed-in user.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, EventId, Timestamp};
use crate::domain::registration::{Registration, RegistrationAvailability, RegistrationError};
use crate::ports::{EventRepository, RegistrationRepository, SessionProvider};

/// Command to register the signed-in user for an event.
#[derive(Debug, Clone, Copy)]
pub struct RegisterForEventCommand {
    pub event_id: EventId,
}

/// Result of successful registration.
#[derive(Debug, Clone)]
pub struct RegisterForEventResult {
    pub registration: Registration,
    /// Availability as it stands after this registration.
    pub availability: RegistrationAvailability,
}

/// Handler for registering for events.
///
/// Availability is derived from a fresh store read, never from the list
/// snapshot the UI rendered. The store enforces one active registration per
/// user and event, so a lost race surfaces as `AlreadyRegistered`.
pub struct RegisterForEventHandler {
    events: Arc<dyn EventRepository>,
    registrations: Arc<dyn RegistrationRepository>,
    sessions: Arc<dyn SessionProvider>,
}

impl RegisterForEventHandler {
    pub fn new(
        events: Arc<dyn EventRepository>,
        registrations: Arc<dyn RegistrationRepository>,
        sessions: Arc<dyn SessionProvider>,
    ) -> Self {
        Self {
            events,
            registrations,
            sessions,
        }
    }

    pub async fn handle(
        &self,
        cmd: RegisterForEventCommand,
    ) -> Result<RegisterForEventResult, RegistrationError> {
        let for_event = |e: DomainError| RegistrationError::from_store_for_event(cmd.event_id, e);

        // 1. Require a signed-in user
        let session = self.sessions.require_session()?;

        // 2. Load the event
        let event = self
            .events
            .find_event(&cmd.event_id)
            .await
            .map_err(for_event)?
            .ok_or(RegistrationError::EventNotFound(cmd.event_id))?;

        // 3. Reject duplicates before touching capacity
        if self
            .registrations
            .find_active(&cmd.event_id, &session.id)
            .await
            .map_err(for_event)?
            .is_some()
        {
            return Err(RegistrationError::AlreadyRegistered(cmd.event_id));
        }

        // 4. Check the window and capacity
        let active = self
            .registrations
            .count_active(&cmd.event_id)
            .await
            .map_err(for_event)?;
        let now = Timestamp::now();
        let before = RegistrationAvailability::for_event(&event, active, false, now);
        if !before.can_register() {
            tracing::debug!(event_id = %cmd.event_id, status = before.status.as_str(), "registration refused");
            return Err(RegistrationError::RegistrationClosed(cmd.event_id));
        }

        // 5. Persist with a profile snapshot
        let registration = Registration::confirmed(cmd.event_id, &session);
        self.registrations
            .create(&registration)
            .await
            .map_err(for_event)?;

        tracing::info!(
            event_id = %cmd.event_id,
            registration_id = %registration.id,
            user_id = %session.id,
            "registered for event"
        );

        let availability =
            RegistrationAvailability::for_event(&event, active.saturating_add(1), true, now);

        Ok(RegisterForEventResult {
            registration,
            availability,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryStore, StaticSessionProvider};
    use crate::domain::event::{Event, RegistrationWindow};
    use crate::domain::foundation::{UserId, UserSession};
    use crate::domain::registration::{AvailabilityStatus, RegistrationStatus};

    fn session(id: &str) -> UserSession {
        UserSession::new(UserId::new(id).unwrap(), format!("{id}@campus.edu"), Some(format!("Student {id}")))
    }

    fn event_with(window: Option<RegistrationWindow>) -> Event {
        let event = Event::new("Robotics Demo Day", "Show your bots", "robotics", Timestamp::now().add_days(10)).unwrap();
        match window {
            Some(w) => event.with_registration(w),
            None => event,
        }
    }

    fn open_window(capacity: u32) -> RegistrationWindow {
        let now = Timestamp::now();
        RegistrationWindow::with_capacity(capacity)
            .between(now.add_days(-1), now.add_days(5))
            .unwrap()
    }

    fn handler_for(store: &Arc<InMemoryStore>, user: &str) -> RegisterForEventHandler {
        RegisterForEventHandler::new(
            store.clone(),
            store.clone(),
            Arc::new(StaticSessionProvider::signed_in(session(user))),
        )
    }

    #[tokio::test]
    async fn registers_with_profile_snapshot() {
        let store = Arc::new(InMemoryStore::new());
        let event = event_with(Some(open_window(50)));
        let event_id = event.id;
        store.put_event(event).await;

        let result = handler_for(&store, "u1")
            .handle(RegisterForEventCommand { event_id })
            .await
            .unwrap();

        assert_eq!(result.registration.status, RegistrationStatus::Confirmed);
        assert_eq!(result.registration.attendee.email, "u1@campus.edu");
        assert_eq!(result.availability.status, AvailabilityStatus::UserAlreadyRegistered);
        assert_eq!(result.availability.spots_left, Some(49));
        assert_eq!(store.count_active(&event_id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn legacy_event_without_window_accepts_registration() {
        let store = Arc::new(InMemoryStore::new());
        let event = event_with(None);
        let event_id = event.id;
        store.put_event(event).await;

        let result = handler_for(&store, "u1")
            .handle(RegisterForEventCommand { event_id })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn full_event_is_closed() {
        let store = Arc::new(InMemoryStore::new());
        let event = event_with(Some(open_window(1)));
        let event_id = event.id;
        store.put_event(event).await;

        handler_for(&store, "u1")
            .handle(RegisterForEventCommand { event_id })
            .await
            .unwrap();
        let err = handler_for(&store, "u2")
            .handle(RegisterForEventCommand { event_id })
            .await
            .unwrap_err();

        assert_eq!(err, RegistrationError::RegistrationClosed(event_id));
        assert_eq!(store.mutation_count(), 1);
    }

    #[tokio::test]
    async fn second_registration_is_already_registered() {
        let store = Arc::new(InMemoryStore::new());
        let event = event_with(None);
        let event_id = event.id;
        store.put_event(event).await;
        let handler = handler_for(&store, "u1");

        handler.handle(RegisterForEventCommand { event_id }).await.unwrap();
        let err = handler.handle(RegisterForEventCommand { event_id }).await.unwrap_err();

        assert_eq!(err, RegistrationError::AlreadyRegistered(event_id));
        assert!(err.is_informational());
    }

    #[tokio::test]
    async fn window_not_yet_open_is_closed() {
        let store = Arc::new(InMemoryStore::new());
        let now = Timestamp::now();
        let window = RegistrationWindow::default()
            .between(now.add_days(2), now.add_days(5))
            .unwrap();
        let event = event_with(Some(window));
        let event_id = event.id;
        store.put_event(event).await;

        let err = handler_for(&store, "u1")
            .handle(RegisterForEventCommand { event_id })
            .await
            .unwrap_err();

        assert_eq!(err, RegistrationError::RegistrationClosed(event_id));
    }

    #[tokio::test]
    async fn missing_event_is_not_found() {
        let store = Arc::new(InMemoryStore::new());
        let event_id = EventId::new();

        let err = handler_for(&store, "u1")
            .handle(RegisterForEventCommand { event_id })
            .await
            .unwrap_err();

        assert_eq!(err, RegistrationError::EventNotFound(event_id));
    }

    #[tokio::test]
    async fn signed_out_is_rejected_without_store_calls() {
        let store = Arc::new(InMemoryStore::new());
        let handler = RegisterForEventHandler::new(
            store.clone(),
            store.clone(),
            Arc::new(StaticSessionProvider::new()),
        );

        let err = handler
            .handle(RegisterForEventCommand { event_id: EventId::new() })
            .await
            .unwrap_err();

        assert_eq!(err, RegistrationError::NotSignedIn);
        assert_eq!(store.mutation_count(), 0);
    }

    #[tokio::test]
    async fn store_outage_is_store_error() {
        let store = Arc::new(InMemoryStore::new());
        store.set_unavailable(true);

        let err = handler_for(&store, "u1")
            .handle(RegisterForEventCommand { event_id: EventId::new() })
            .await
            .unwrap_err();

        assert!(matches!(err, RegistrationError::Store(_)));
    }
}
