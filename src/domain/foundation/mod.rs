//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Talent Hub domain.

mod auth;
mod errors;
mod ids;
mod rating;
mod state_machine;
mod timestamp;

pub use auth::{AuthError, UserSession};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{EntityRef, EventId, PostId, RegistrationId, UserId};
pub use rating::FeedbackRating;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
