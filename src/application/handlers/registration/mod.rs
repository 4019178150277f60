//! Registration handlers.
//!
//! ## Commands
//! - Registering for an event
//! - Cancelling a registration
//! - Submitting post-event feedback
//! - Marking attendance (organizers)
//!
//! ## Queries
//! - Registration banner status for an event
//! - Whether the signed-in user is registered (fail-closed)
//! - The signed-in user's registrations

mod cancel_registration;
mod get_registration_status;
mod list_my_registrations;
mod mark_attended;
mod register_for_event;
mod resolve_registration;
mod submit_feedback;

// Commands
pub use cancel_registration::{
    CancelRegistrationCommand, CancelRegistrationHandler, CancelRegistrationResult,
};
pub use mark_attended::{MarkAttendedCommand, MarkAttendedHandler, MarkAttendedResult};
pub use register_for_event::{
    RegisterForEventCommand, RegisterForEventHandler, RegisterForEventResult,
};
pub use submit_feedback::{SubmitFeedbackCommand, SubmitFeedbackHandler, SubmitFeedbackResult};

// Queries
pub use get_registration_status::{
    GetRegistrationStatusHandler, GetRegistrationStatusQuery, GetRegistrationStatusResult,
};
pub use list_my_registrations::{
    ListMyRegistrationsHandler, ListMyRegistrationsQuery, ListMyRegistrationsResult,
};
pub use resolve_registration::{ResolveRegistrationHandler, ResolveRegistrationQuery};
