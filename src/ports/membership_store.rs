//! Membership store port: favorites on events, likes on posts.
//!
//! # Design
//!
//! Commands are keyed by `(entity, user)` and state the desired membership.
//! They are never "toggle": the client does not read the current value and
//! write its inverse, so two devices of the same user racing each other both
//! converge on the last command the store applied.
//!
//! # Contract
//!
//! Implementations must:
//! - Treat `add_membership` on a present user and `remove_membership` on an
//!   absent user as successful no-ops (`MembershipChange::Unchanged`)
//! - Return an error with a not-found code if the entity does not exist
//! - Apply each command atomically on the single entity document

use async_trait::async_trait;

use crate::domain::engagement::MembershipChange;
use crate::domain::foundation::{DomainError, EntityRef, UserId};

/// Remote membership sets.
#[async_trait]
pub trait MembershipStore: Send + Sync {
    /// Ensure `user_id` is in the entity's membership set.
    async fn add_membership(
        &self,
        entity: EntityRef,
        user_id: &UserId,
    ) -> Result<MembershipChange, DomainError>;

    /// Ensure `user_id` is not in the entity's membership set.
    async fn remove_membership(
        &self,
        entity: EntityRef,
        user_id: &UserId,
    ) -> Result<MembershipChange, DomainError>;

    /// Existence query for one membership.
    async fn is_member(&self, entity: EntityRef, user_id: &UserId) -> Result<bool, DomainError>;
}
