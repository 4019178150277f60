//! Favorite/like button view-model.
//!
//! The button owns a [`MembershipToggleViewModel`] behind `Arc<Mutex<_>>`.
//! [`MembershipToggleViewModel::toggle`] receives only a `Weak` reference:
//! if the screen is torn down while the command is in flight, the store
//! result is dropped instead of being written into a dead view.

use std::sync::{Arc, Weak};

use tokio::sync::Mutex;

use crate::application::handlers::engagement::{SetMembershipCommand, SetMembershipHandler};
use crate::application::notice::UserNotice;
use crate::domain::engagement::{is_member, HasMembers, OptimisticToggle};
use crate::domain::foundation::{EntityRef, UserId};

/// What happened to a tap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The store accepted the command; the new membership is shown.
    Confirmed(bool),
    /// The command failed; the previous value is shown again.
    Reverted(UserNotice),
    /// A command was already in flight; the tap was ignored.
    Busy,
    /// The view went away before the result arrived.
    Discarded,
}

/// State behind one favorite/like button.
#[derive(Debug, Clone)]
pub struct MembershipToggleViewModel {
    entity: EntityRef,
    state: OptimisticToggle,
    notice: Option<UserNotice>,
}

pub type SharedToggle = Arc<Mutex<MembershipToggleViewModel>>;

impl MembershipToggleViewModel {
    pub fn new(entity: EntityRef, member: bool) -> Self {
        Self {
            entity,
            state: OptimisticToggle::new(member),
            notice: None,
        }
    }

    /// Initial paint from a list snapshot.
    pub fn from_snapshot<E: HasMembers + ?Sized>(entity: &E, user: Option<&UserId>) -> Self {
        Self::new(entity.entity_ref(), is_member(entity, user))
    }

    pub fn shared(self) -> SharedToggle {
        Arc::new(Mutex::new(self))
    }

    pub fn entity(&self) -> EntityRef {
        self.entity
    }

    pub fn is_active(&self) -> bool {
        self.state.displayed()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Takes the pending notice, if any.
    pub fn take_notice(&mut self) -> Option<UserNotice> {
        self.notice.take()
    }

    /// Applies a fresh resolver read. Ignored while a command is in flight.
    pub fn reconcile(&mut self, member: bool) -> bool {
        self.state.reconcile(member)
    }

    /// Handles a tap: flip the display, send one command, then confirm or
    /// revert.
    pub async fn toggle(
        view: Weak<Mutex<Self>>,
        handler: &SetMembershipHandler,
        user_id: Option<UserId>,
    ) -> ToggleOutcome {
        let (entity, target) = {
            let Some(strong) = view.upgrade() else {
                return ToggleOutcome::Discarded;
            };
            let mut vm = strong.lock().await;
            let Some(target) = vm.state.begin() else {
                return ToggleOutcome::Busy;
            };
            vm.notice = None;
            let entity = vm.entity;
            (entity, target)
        };

        let result = handler
            .handle(SetMembershipCommand {
                entity,
                user_id,
                member: target,
            })
            .await;

        let Some(strong) = view.upgrade() else {
            tracing::debug!(entity = %entity, "toggle finished after view was dropped");
            return ToggleOutcome::Discarded;
        };
        let mut vm = strong.lock().await;

        match result {
            Ok(done) => {
                vm.state.confirm(done.member);
                ToggleOutcome::Confirmed(done.member)
            }
            Err(e) => {
                tracing::warn!(entity = %entity, error = %e, "toggle reverted");
                vm.state.revert();
                let notice = UserNotice::from(&e);
                vm.notice = Some(notice.clone());
                ToggleOutcome::Reverted(notice)
            }
        }
    }
}
