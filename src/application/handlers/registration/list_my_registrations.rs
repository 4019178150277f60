//! ListMyRegistrationsHandler - Query for the "My events" tab.

use std::sync::Arc;

use crate::domain::registration::{Registration, RegistrationError};
use crate::ports::{RegistrationRepository, SessionProvider};

#[derive(Debug, Clone, Copy, Default)]
pub struct ListMyRegistrationsQuery {
    /// Include cancelled registrations.
    pub include_cancelled: bool,
}

#[derive(Debug, Clone)]
pub struct ListMyRegistrationsResult {
    /// Newest first.
    pub registrations: Vec<Registration>,
}

pub struct ListMyRegistrationsHandler {
    registrations: Arc<dyn RegistrationRepository>,
    sessions: Arc<dyn SessionProvider>,
}

impl ListMyRegistrationsHandler {
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
        query: ListMyRegistrationsQuery,
    ) -> Result<ListMyRegistrationsResult, RegistrationError> {
        let user_id = self
            .sessions
            .current_user_id()
            .ok_or(RegistrationError::NotSignedIn)?;

        let mut registrations = self.registrations.list_for_user(&user_id).await?;
        if !query.include_cancelled {
            registrations.retain(Registration::is_active);
        }

        Ok(ListMyRegistrationsResult { registrations })
    }
}
