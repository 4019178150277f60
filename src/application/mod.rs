//! Application layer - Commands, Queries, Handlers and View-models.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Every failure surfaces as a [`UserNotice`]; nothing here panics or
//! terminates the process.

pub mod handlers;
pub mod notice;
pub mod view_model;

pub use handlers::*;
pub use notice::{NoticeLevel, UserNotice};
pub use view_model::{EventFeedViewModel, MembershipToggleViewModel, SharedToggle, ToggleOutcome};
