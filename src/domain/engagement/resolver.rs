//! Membership resolution against an entity snapshot.
//!
//! This is the synchronous half of the resolver: the entity payload already
//! carries its membership set. The store-backed half lives in
//! `application::handlers::engagement::ResolveMembershipHandler`.

use crate::domain::foundation::{EntityRef, UserId};

use super::MembershipSet;

/// An entity that carries a membership set.
pub trait HasMembers {
    /// Reference used to address the entity in store commands.
    fn entity_ref(&self) -> EntityRef;

    /// Users who favorited or liked the entity.
    fn members(&self) -> &MembershipSet;

    /// Mutable access, used by store adapters applying commands.
    fn members_mut(&mut self) -> &mut MembershipSet;
}

/// Returns whether `user` belongs to `entity`'s membership set.
///
/// No signed-in user is never a member.
pub fn is_member<E: HasMembers + ?Sized>(entity: &E, user: Option<&UserId>) -> bool {
    user.map_or(false, |id| entity.members().contains(id))
}
