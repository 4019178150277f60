//! SubmitFeedbackHandler - Command handler for post-event feedback.

use std::sync::Arc;

use crate::domain::foundation::{FeedbackRating, RegistrationId};
use crate::domain::registration::{Feedback, Registration, RegistrationError};
use crate::ports::{RegistrationRepository, SessionProvider};

/// Command to leave feedback on a registration.
#[derive(Debug, Clone)]
pub struct SubmitFeedbackCommand {
    pub registration_id: RegistrationId,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub comment: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SubmitFeedbackResult {
    pub registration: Registration,
}

/// Handler for submitting feedback.
///
/// Rating and comment are validated before the store is contacted.
pub struct SubmitFeedbackHandler {
    registrations: Arc<dyn RegistrationRepository>,
    sessions: Arc<dyn SessionProvider>,
}

impl SubmitFeedbackHandler {
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
        cmd: SubmitFeedbackCommand,
    ) -> Result<SubmitFeedbackResult, RegistrationError> {
        let user_id = self
            .sessions
            .current_user_id()
            .ok_or(RegistrationError::NotSignedIn)?;

        let feedback = Feedback::new(FeedbackRating::new(cmd.rating)?, cmd.comment)?;

        let mut registration = self
            .registrations
            .find(&cmd.registration_id)
            .await
            .map_err(|e| RegistrationError::from_store_for_registration(cmd.registration_id, e))?
            .filter(|r| r.user_id == user_id)
            .ok_or(RegistrationError::RegistrationNotFound(cmd.registration_id))?;

        registration.submit_feedback(feedback)?;

        self.registrations
            .update(&registration)
            .await
            .map_err(|e| RegistrationError::from_store_for_registration(cmd.registration_id, e))?;

        tracing::info!(registration_id = %registration.id, rating = cmd.rating, "feedback submitted");

        Ok(SubmitFeedbackResult { registration })
    }
}
