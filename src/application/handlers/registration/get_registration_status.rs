//! GetRegistrationStatusHandler - Query handler for the event detail banner.

use std::sync::Arc;

use crate::domain::event::Event;
use crate::domain::foundation::{DomainError, EventId, Timestamp};
use crate::domain::registration::{Registration, RegistrationAvailability, RegistrationError};
use crate::ports::{EventRepository, RegistrationRepository, SessionProvider};

#[derive(Debug, Clone, Copy)]
pub struct GetRegistrationStatusQuery {
    pub event_id: EventId,
}

/// Everything the event detail screen needs for its registration panel.
#[derive(Debug, Clone)]
pub struct GetRegistrationStatusResult {
    pub event: Event,
    /// The signed-in user's active registration, if any.
    pub registration: Option<Registration>,
    pub availability: RegistrationAvailability,
}

impl GetRegistrationStatusResult {
    pub fn can_register(&self) -> bool {
        self.availability.can_register()
    }
}

/// Single authoritative read per render: event, active count and the
/// user's own registration all come from the store in one query.
///
/// Signed-out users still get the banner; they are never "already
/// registered".
pub struct GetRegistrationStatusHandler {
    events: Arc<dyn EventRepository>,
    registrations: Arc<dyn RegistrationRepository>,
    sessions: Arc<dyn SessionProvider>,
}

impl GetRegistrationStatusHandler {
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
        query: GetRegistrationStatusQuery,
    ) -> Result<GetRegistrationStatusResult, RegistrationError> {
        let for_event = |e: DomainError| RegistrationError::from_store_for_event(query.event_id, e);

        let event = self
            .events
            .find_event(&query.event_id)
            .await
            .map_err(for_event)?
            .ok_or(RegistrationError::EventNotFound(query.event_id))?;

        let registration = match self.sessions.current_user_id() {
            Some(user_id) => self
                .registrations
                .find_active(&query.event_id, &user_id)
                .await
                .map_err(for_event)?,
            None => None,
        };

        let active = self
            .registrations
            .count_active(&query.event_id)
            .await
            .map_err(for_event)?;

        let availability = RegistrationAvailability::for_event(
            &event,
            active,
            registration.is_some(),
            Timestamp::now(),
        );

        tracing::debug!(
            event_id = %query.event_id,
            status = availability.status.as_str(),
            spots_left = ?availability.spots_left,
            "registration status derived"
        );

        Ok(GetRegistrationStatusResult {
            event,
            registration,
            availability,
        })
    }
}
