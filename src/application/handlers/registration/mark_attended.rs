//! MarkAttendedHandler - Organizer command marking an attendee as present.

use std::sync::Arc;

use crate::domain::foundation::RegistrationId;
use crate::domain::registration::{Registration, RegistrationError};
use crate::ports::{RegistrationRepository, SessionProvider};

#[derive(Debug, Clone, Copy)]
pub struct MarkAttendedCommand {
    pub registration_id: RegistrationId,
}

#[derive(Debug, Clone)]
pub struct MarkAttendedResult {
    pub registration: Registration,
}

/// Handler for check-in at the door.
///
/// Organizer permissions are enforced by the store's rules; the handler only
/// requires that someone is signed in.
pub struct MarkAttendedHandler {
    registrations: Arc<dyn RegistrationRepository>,
    sessions: Arc<dyn SessionProvider>,
}

impl MarkAttendedHandler {
    pub fn new(
        registrations: Arc<dyn RegistrationRepository>,
        sessions: Arc<dyn SessionProvider>,
    ) -> Self {
        Self {
            registrations,
            sessions,
        }
    }

    pub async fn handle(&self, cmd: MarkAttendedCommand) -> Result<MarkAttendedResult, RegistrationError> {
        let organizer = self.sessions.require_session()?;

        let mut registration = self
            .registrations
            .find(&cmd.registration_id)
            .await
            .map_err(|e| RegistrationError::from_store_for_registration(cmd.registration_id, e))?
            .ok_or(RegistrationError::RegistrationNotFound(cmd.registration_id))?;

        registration.mark_attended()?;

        self.registrations
            .update(&registration)
            .await
            .map_err(|e| RegistrationError::from_store_for_registration(cmd.registration_id, e))?;

        tracing::info!(
            registration_id = %registration.id,
            organizer = %organizer.id,
            "attendance recorded"
        );

        Ok(MarkAttendedResult { registration })
    }
}
