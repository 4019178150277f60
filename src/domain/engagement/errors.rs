//! Favorite/like error types.

use thiserror::Error;

use crate::domain::foundation::{AuthError, DomainError, EntityRef, ErrorCode, ValidationError};

/// Failures of membership queries and commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngagementError {
    /// Nobody is signed in, so there is no user to add or remove.
    #[error("Sign in to save favorites")]
    NotSignedIn,

    /// Input rejected before any remote call.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The entity disappeared from the store.
    #[error("This {} is no longer available", .0.kind())]
    EntityNotFound(EntityRef),

    /// Transport failure reaching the store.
    #[error("Could not reach the server: {0}")]
    Store(String),
}

impl EngagementError {
    /// Maps a store error for the given entity.
    pub fn from_store(entity: EntityRef, err: DomainError) -> Self {
        match err.code {
            code if code.is_not_found() => EngagementError::EntityNotFound(entity),
            ErrorCode::ValidationFailed => EngagementError::Validation(
                ValidationError::invalid_format(
                    err.details.get("field").cloned().unwrap_or_default(),
                    err.message,
                ),
            ),
            ErrorCode::Unauthenticated => EngagementError::NotSignedIn,
            _ => EngagementError::Store(err.message),
        }
    }

    /// Not found is informational: the entity is gone, nothing to undo.
    pub fn is_informational(&self) -> bool {
        matches!(self, EngagementError::EntityNotFound(_))
    }
}

impl From<AuthError> for EngagementError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::NotSignedIn => EngagementError::NotSignedIn,
            AuthError::ServiceUnavailable(reason) => EngagementError::Store(reason),
        }
    }
}
