//! The set of users who favorited (events) or liked (posts) an entity.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::UserId;

/// Outcome of applying a set-membership command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipChange {
    Added,
    Removed,
    /// The set already had the requested membership.
    Unchanged,
}

impl MembershipChange {
    /// Returns true if the command modified the set.
    pub fn is_change(&self) -> bool {
        !matches!(self, MembershipChange::Unchanged)
    }
}

/// Membership set embedded in an entity payload.
///
/// A user id appears at most once. Ordered so snapshots serialize stably.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MembershipSet(BTreeSet<UserId>);

impl MembershipSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, user_id: &UserId) -> bool {
        self.0.contains(user_id)
    }

    /// Sets `user_id`'s membership to `member`.
    ///
    /// Applying the same command twice leaves the set as the first
    /// application did.
    pub fn set(&mut self, user_id: &UserId, member: bool) -> MembershipChange {
        if member {
            if self.0.insert(user_id.clone()) {
                return MembershipChange::Added;
            }
        } else if self.0.remove(user_id) {
            return MembershipChange::Removed;
        }
        MembershipChange::Unchanged
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UserId> {
        self.0.iter()
    }
}

impl FromIterator<UserId> for MembershipSet {
    fn from_iter<I: IntoIterator<Item = UserId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
