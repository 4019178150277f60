//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod discovery;
pub mod engagement;
pub mod registration;

pub use discovery::{SearchEventsHandler, SearchEventsQuery, SearchPostsHandler, SearchPostsQuery};
pub use engagement::{
    ResolveMembershipHandler, ResolveMembershipQuery, SetMembershipCommand, SetMembershipHandler,
    SetMembershipResult,
};
pub use registration::{
    CancelRegistrationCommand, CancelRegistrationHandler, CancelRegistrationResult,
    GetRegistrationStatusHandler, GetRegistrationStatusQuery, GetRegistrationStatusResult,
    ListMyRegistrationsHandler, ListMyRegistrationsQuery, ListMyRegistrationsResult,
    MarkAttendedCommand, MarkAttendedHandler, MarkAttendedResult, RegisterForEventCommand,
    RegisterForEventHandler, RegisterForEventResult, ResolveRegistrationHandler,
    ResolveRegistrationQuery, SubmitFeedbackCommand, SubmitFeedbackHandler, SubmitFeedbackResult,
};
