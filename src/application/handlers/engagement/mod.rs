//! Engagement handlers: favorites on events and likes on posts.
//!
//! ## Commands
//! - Setting a membership to a desired state
//!
//! ## Queries
//! - Resolving the signed-in user's membership (fail-closed)

mod resolve_membership;
mod set_membership;

// Commands
pub use set_membership::{SetMembershipCommand, SetMembershipHandler, SetMembershipResult};

// Queries
pub use resolve_membership::{ResolveMembershipHandler, ResolveMembershipQuery};
