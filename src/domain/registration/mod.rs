//! Registration module - enrollment lifecycle and availability.
//!
//! - `status` - lifecycle state machine
//! - `aggregate` - the registration record, attendee snapshot and feedback
//! - `availability` - registration banner derivation

mod aggregate;
mod availability;
mod errors;
mod status;

pub use aggregate::{AttendeeSnapshot, Feedback, Registration, MAX_COMMENT_CHARS};
pub use availability::{AvailabilityStatus, RegistrationAvailability, SPOTS_LOW_THRESHOLD};
pub use errors::RegistrationError;
pub use status::RegistrationStatus;
