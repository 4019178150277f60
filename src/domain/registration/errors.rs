//! Registration-specific error types.
//!
//! | Error | Notice |
//! |-------|--------|
//! | NotSignedIn | error |
//! | Validation | error |
//! | EventNotFound | info |
//! | RegistrationNotFound | info |
//! | AlreadyRegistered | info |
//! | AlreadyCancelled | info |
//! | RegistrationClosed | error |
//! | InvalidState | error |
//! | FeedbackAlreadySubmitted | info |
//! | Store | error |

use thiserror::Error;

use crate::domain::foundation::{
    AuthError, DomainError, ErrorCode, EventId, RegistrationId, ValidationError,
};

use super::RegistrationStatus;

/// Registration-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Sign in to register for events")]
    NotSignedIn,

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("This event is no longer available")]
    EventNotFound(EventId),

    #[error("This registration no longer exists")]
    RegistrationNotFound(RegistrationId),

    #[error("You are already registered for this event")]
    AlreadyRegistered(EventId),

    #[error("This registration was already cancelled")]
    AlreadyCancelled(RegistrationId),

    #[error("Registration for this event is closed")]
    RegistrationClosed(EventId),

    #[error("Cannot {attempted} a registration that is {current}")]
    InvalidState {
        current: RegistrationStatus,
        attempted: &'static str,
    },

    #[error("Feedback was already submitted for this registration")]
    FeedbackAlreadySubmitted(RegistrationId),

    #[error("Could not reach the server: {0}")]
    Store(String),
}

impl RegistrationError {
    pub fn invalid_state(current: RegistrationStatus, attempted: &'static str) -> Self {
        RegistrationError::InvalidState { current, attempted }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            RegistrationError::NotSignedIn => ErrorCode::Unauthenticated,
            RegistrationError::Validation(_) => ErrorCode::ValidationFailed,
            RegistrationError::EventNotFound(_) => ErrorCode::EventNotFound,
            RegistrationError::RegistrationNotFound(_) => ErrorCode::RegistrationNotFound,
            RegistrationError::AlreadyRegistered(_) => ErrorCode::AlreadyRegistered,
            RegistrationError::AlreadyCancelled(_) | RegistrationError::InvalidState { .. } => {
                ErrorCode::InvalidStateTransition
            }
            RegistrationError::RegistrationClosed(_) => ErrorCode::RegistrationClosed,
            RegistrationError::FeedbackAlreadySubmitted(_) => ErrorCode::FeedbackAlreadySubmitted,
            RegistrationError::Store(_) => ErrorCode::StoreUnavailable,
        }
    }

    /// True when the action already happened or can no longer happen.
    ///
    /// These surface as informational notices rather than errors.
    pub fn is_informational(&self) -> bool {
        matches!(
            self,
            RegistrationError::EventNotFound(_)
                | RegistrationError::RegistrationNotFound(_)
                | RegistrationError::AlreadyRegistered(_)
                | RegistrationError::AlreadyCancelled(_)
                | RegistrationError::FeedbackAlreadySubmitted(_)
        )
    }

    /// Maps a store failure that happened while handling `event_id`.
    pub fn from_store_for_event(event_id: EventId, err: DomainError) -> Self {
        match err.code {
            ErrorCode::EventNotFound => RegistrationError::EventNotFound(event_id),
            ErrorCode::AlreadyRegistered => RegistrationError::AlreadyRegistered(event_id),
            ErrorCode::RegistrationClosed => RegistrationError::RegistrationClosed(event_id),
            _ => RegistrationError::from(err),
        }
    }

    /// Maps a store failure that happened while handling `registration_id`.
    pub fn from_store_for_registration(registration_id: RegistrationId, err: DomainError) -> Self {
        match err.code {
            ErrorCode::RegistrationNotFound => {
                RegistrationError::RegistrationNotFound(registration_id)
            }
            _ => RegistrationError::from(err),
        }
    }
}

impl From<DomainError> for RegistrationError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => RegistrationError::Validation(
                ValidationError::invalid_format(
                    err.details.get("field").cloned().unwrap_or_default(),
                    err.message,
                ),
            ),
            ErrorCode::Unauthenticated => RegistrationError::NotSignedIn,
            _ => RegistrationError::Store(err.message),
        }
    }
}

impl From<AuthError> for RegistrationError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::NotSignedIn => RegistrationError::NotSignedIn,
            AuthError::ServiceUnavailable(reason) => RegistrationError::Store(reason),
        }
    }
}

impl From<RegistrationError> for DomainError {
    fn from(err: RegistrationError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_and_repeats_are_informational() {
        assert!(RegistrationError::EventNotFound(EventId::new()).is_informational());
        assert!(RegistrationError::AlreadyCancelled(RegistrationId::new()).is_informational());
        assert!(RegistrationError::AlreadyRegistered(EventId::new()).is_informational());
    }

    #[test]
    fn closed_and_transport_are_not_informational() {
        assert!(!RegistrationError::RegistrationClosed(EventId::new()).is_informational());
        assert!(!RegistrationError::Store("timeout".into()).is_informational());
    }

    #[test]
    fn store_not_found_maps_to_event_not_found() {
        let id = EventId::new();
        let err = RegistrationError::from_store_for_event(
            id,
            DomainError::new(ErrorCode::EventNotFound, "missing"),
        );
        assert_eq!(err, RegistrationError::EventNotFound(id));
    }

    #[test]
    fn store_full_maps_to_registration_closed() {
        let id = EventId::new();
        let err = RegistrationError::from_store_for_event(
            id,
            DomainError::new(ErrorCode::RegistrationClosed, "event is full"),
        );
        assert_eq!(err, RegistrationError::RegistrationClosed(id));
    }

    #[test]
    fn store_duplicate_maps_to_already_registered() {
        let id = EventId::new();
        let err = RegistrationError::from_store_for_event(
            id,
            DomainError::new(ErrorCode::AlreadyRegistered, "duplicate"),
        );
        assert_eq!(err, RegistrationError::AlreadyRegistered(id));
    }

    #[test]
    fn invalid_state_message_names_status() {
        let err = RegistrationError::invalid_state(RegistrationStatus::Attended, "cancel");
        assert_eq!(err.to_string(), "Cannot cancel a registration that is Attended");
    }

    #[test]
    fn signed_out_auth_maps_to_not_signed_in() {
        assert_eq!(
            RegistrationError::from(AuthError::NotSignedIn),
            RegistrationError::NotSignedIn
        );
    }

    #[test]
    fn converts_to_domain_error_with_code() {
        let err: DomainError = RegistrationError::NotSignedIn.into();
        assert_eq!(err.code, ErrorCode::Unauthenticated);
    }
}
