//! ResolveRegistrationHandler - "am I registered for this event" existence query.

use std::sync::Arc;

use crate::domain::foundation::EventId;
use crate::ports::{RegistrationRepository, SessionProvider};

#[derive(Debug, Clone, Copy)]
pub struct ResolveRegistrationQuery {
    pub event_id: EventId,
}

/// Fails closed like the membership resolver: errors and signed-out users
/// resolve to `false`.
pub struct ResolveRegistrationHandler {
    registrations: Arc<dyn RegistrationRepository>,
    sessions: Arc<dyn SessionProvider>,
}

impl ResolveRegistrationHandler {
    pub fn new(
        registrations: Arc<dyn RegistrationRepository>,
        sessions: Arc<dyn SessionProvider>,
    ) -> Self {
        Self {
            registrations,
            sessions,
        }
    }

    pub async fn handle(&self, query: ResolveRegistrationQuery) -> bool {
        let Some(user_id) = self.sessions.current_user_id() else {
            return false;
        };

        match self.registrations.find_active(&query.event_id, &user_id).await {
            Ok(found) => found.is_some(),
            Err(e) => {
                tracing::warn!(
                    event_id = %query.event_id,
                    user_id = %user_id,
                    error = %e,
                    "registration query failed, resolving as not registered"
                );
                false
            }
        }
    }
}
