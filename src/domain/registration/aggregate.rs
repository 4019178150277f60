//! Registration aggregate: one user's enrollment in one event.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    EventId, FeedbackRating, RegistrationId, StateMachine, Timestamp, UserId, UserSession,
    ValidationError,
};

use super::{RegistrationError, RegistrationStatus};

/// Longest feedback comment accepted, in characters.
pub const MAX_COMMENT_CHARS: usize = 1000;

/// Profile details copied onto the registration when it is created, so the
/// organizer's attendee list survives later profile edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendeeSnapshot {
    pub display_name: String,
    pub email: String,
}

impl From<&UserSession> for AttendeeSnapshot {
    fn from(session: &UserSession) -> Self {
        Self {
            display_name: session.display_name_or_email().to_string(),
            email: session.email.clone(),
        }
    }
}

/// Post-event feedback left on a registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub rating: FeedbackRating,
    #[serde(default)]
    pub comment: Option<String>,
    pub submitted_at: Timestamp,
}

impl Feedback {
    /// Builds feedback, trimming the comment and dropping it when blank.
    pub fn new(rating: FeedbackRating, comment: Option<String>) -> Result<Self, ValidationError> {
        let comment = comment
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        if let Some(ref c) = comment {
            let len = c.chars().count();
            if len > MAX_COMMENT_CHARS {
                return Err(ValidationError::out_of_range(
                    "comment",
                    0,
                    MAX_COMMENT_CHARS as i32,
                    len as i32,
                ));
            }
        }

        Ok(Self {
            rating,
            comment,
            submitted_at: Timestamp::now(),
        })
    }
}

/// A user's registration for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub id: RegistrationId,
    pub event_id: EventId,
    pub user_id: UserId,
    pub attendee: AttendeeSnapshot,
    pub status: RegistrationStatus,
    pub registered_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default)]
    pub feedback: Option<Feedback>,
}

impl Registration {
    /// Creates a confirmed registration for the signed-in user.
    ///
    /// Free events confirm immediately; nothing in this crate collects
    /// payment, so every new registration starts confirmed.
    pub fn confirmed(event_id: EventId, session: &UserSession) -> Self {
        let now = Timestamp::now();
        Self {
            id: RegistrationId::new(),
            event_id,
            user_id: session.id.clone(),
            attendee: AttendeeSnapshot::from(session),
            status: RegistrationStatus::Confirmed,
            registered_at: now,
            updated_at: now,
            feedback: None,
        }
    }

    /// Holds a seat and blocks a second registration for the same user.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Cancels the registration.
    ///
    /// Cancelling twice reports `AlreadyCancelled` so callers can treat the
    /// repeat as already done.
    pub fn cancel(&mut self) -> Result<(), RegistrationError> {
        if self.status == RegistrationStatus::Cancelled {
            return Err(RegistrationError::AlreadyCancelled(self.id));
        }
        self.transition(RegistrationStatus::Cancelled, "cancel")
    }

    /// Marks the attendee as present at the event.
    pub fn mark_attended(&mut self) -> Result<(), RegistrationError> {
        self.transition(RegistrationStatus::Attended, "mark attended")
    }

    /// Records feedback once, on a confirmed or attended registration.
    pub fn submit_feedback(&mut self, feedback: Feedback) -> Result<(), RegistrationError> {
        if !self.status.accepts_feedback() {
            return Err(RegistrationError::invalid_state(self.status, "review"));
        }
        if self.feedback.is_some() {
            return Err(RegistrationError::FeedbackAlreadySubmitted(self.id));
        }
        self.feedback = Some(feedback);
        self.updated_at = Timestamp::now();
        Ok(())
    }

    fn transition(
        &mut self,
        target: RegistrationStatus,
        attempted: &'static str,
    ) -> Result<(), RegistrationError> {
        let current = self.status;
        self.status = current
            .transition_to(target)
            .map_err(|_| RegistrationError::invalid_state(current, attempted))?;
        self.updated_at = Timestamp::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> UserSession {
        UserSession::new(
            UserId::new("u1").unwrap(),
            "ada@campus.edu",
            Some("Ada".to_string()),
        )
    }

    fn registration() -> Registration {
        Registration::confirmed(EventId::new(), &session())
    }

    fn five_stars() -> Feedback {
        Feedback::new(FeedbackRating::new(5).unwrap(), Some("Great talk".into())).unwrap()
    }

    #[test]
    fn new_registration_is_confirmed_and_active() {
        let reg = registration();
        assert_eq!(reg.status, RegistrationStatus::Confirmed);
        assert!(reg.is_active());
        assert_eq!(reg.attendee.display_name, "Ada");
    }

    #[test]
    fn cancel_makes_registration_inactive() {
        let mut reg = registration();
        reg.cancel().unwrap();
        assert_eq!(reg.status, RegistrationStatus::Cancelled);
        assert!(!reg.is_active());
    }

    #[test]
    fn second_cancel_reports_already_cancelled() {
        let mut reg = registration();
        reg.cancel().unwrap();
        assert_eq!(reg.cancel(), Err(RegistrationError::AlreadyCancelled(reg.id)));
    }

    #[test]
    fn attended_cannot_be_cancelled() {
        let mut reg = registration();
        reg.mark_attended().unwrap();
        assert!(matches!(
            reg.cancel(),
            Err(RegistrationError::InvalidState { current: RegistrationStatus::Attended, .. })
        ));
    }

    #[test]
    fn cancelled_cannot_be_attended() {
        let mut reg = registration();
        reg.cancel().unwrap();
        assert!(reg.mark_attended().is_err());
    }

    #[test]
    fn feedback_accepted_once() {
        let mut reg = registration();
        reg.mark_attended().unwrap();
        reg.submit_feedback(five_stars()).unwrap();

        assert_eq!(reg.feedback.as_ref().unwrap().rating.value(), 5);
        assert_eq!(
            reg.submit_feedback(five_stars()),
            Err(RegistrationError::FeedbackAlreadySubmitted(reg.id))
        );
    }

    #[test]
    fn feedback_refused_on_cancelled() {
        let mut reg = registration();
        reg.cancel().unwrap();
        assert!(matches!(
            reg.submit_feedback(five_stars()),
            Err(RegistrationError::InvalidState { .. })
        ));
    }

    #[test]
    fn blank_comment_is_dropped() {
        let feedback = Feedback::new(FeedbackRating::new(3).unwrap(), Some("   ".into())).unwrap();
        assert!(feedback.comment.is_none());
    }

    #[test]
    fn overlong_comment_is_rejected() {
        let long = "x".repeat(MAX_COMMENT_CHARS + 1);
        assert!(Feedback::new(FeedbackRating::new(3).unwrap(), Some(long)).is_err());
    }

    #[test]
    fn snapshot_falls_back_to_email() {
        let session = UserSession::new(UserId::new("u2").unwrap(), "bo@campus.edu", None);
        let snapshot = AttendeeSnapshot::from(&session);
        assert_eq!(snapshot.display_name, "bo@campus.edu");
    }
}
