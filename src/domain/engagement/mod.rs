//! Engagement module - favorites on events, likes on showcase posts.
//!
//! Both are a membership set of user ids on the entity, resolved by
//! containment and mutated with idempotent set commands.

mod errors;
mod membership_set;
mod optimistic;
mod resolver;

pub use errors::EngagementError;
pub use membership_set::{MembershipChange, MembershipSet};
pub use optimistic::OptimisticToggle;
pub use resolver::{is_member, HasMembers};
