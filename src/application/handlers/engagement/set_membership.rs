//! SetMembershipHandler - Command handler for favoriting events and liking posts.

use std::sync::Arc;

use crate::domain::engagement::{EngagementError, MembershipChange};
use crate::domain::foundation::{EntityRef, UserId};
use crate::ports::MembershipStore;

/// Command stating the desired membership of a user on an entity.
#[derive(Debug, Clone)]
pub struct SetMembershipCommand {
    pub entity: EntityRef,
    /// `None` when nobody is signed in.
    pub user_id: Option<UserId>,
    /// Desired final state, never "flip".
    pub member: bool,
}

/// Result of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetMembershipResult {
    pub entity: EntityRef,
    /// Membership after the command.
    pub member: bool,
    pub change: MembershipChange,
}

/// Handler issuing exactly one add or remove command.
///
/// Repeating a command with the same target is a no-op on the store, so
/// double taps and retries are safe.
pub struct SetMembershipHandler {
    store: Arc<dyn MembershipStore>,
}

impl SetMembershipHandler {
    pub fn new(store: Arc<dyn MembershipStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: SetMembershipCommand,
    ) -> Result<SetMembershipResult, EngagementError> {
        // 1. Validate before any remote call
        let user_id = cmd.user_id.ok_or(EngagementError::NotSignedIn)?;

        // 2. One idempotent command
        let outcome = if cmd.member {
            self.store.add_membership(cmd.entity, &user_id).await
        } else {
            self.store.remove_membership(cmd.entity, &user_id).await
        };

        let change = outcome.map_err(|e| {
            tracing::error!(entity = %cmd.entity, user_id = %user_id, error = %e, "membership command failed");
            EngagementError::from_store(cmd.entity, e)
        })?;

        tracing::debug!(entity = %cmd.entity, user_id = %user_id, member = cmd.member, ?change, "membership set");

        Ok(SetMembershipResult {
            entity: cmd.entity,
            member: cmd.member,
            change,
        })
    }
}
