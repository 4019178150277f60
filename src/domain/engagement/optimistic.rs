//! Optimistic toggle state for a favorite/like button.
//!
//! The displayed value flips as soon as the user taps; the confirmed value
//! only moves when the store acknowledges the command. One command may be in
//! flight at a time (the button shows a loading state meanwhile).

use serde::Serialize;

/// Local presentation state of a membership toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptimisticToggle {
    confirmed: bool,
    displayed: bool,
    in_flight: Option<bool>,
}

impl OptimisticToggle {
    /// Starts from a value read from the store.
    pub fn new(confirmed: bool) -> Self {
        Self {
            confirmed,
            displayed: confirmed,
            in_flight: None,
        }
    }

    /// What the UI should render right now.
    pub fn displayed(&self) -> bool {
        self.displayed
    }

    /// Last value the store acknowledged.
    pub fn confirmed(&self) -> bool {
        self.confirmed
    }

    /// Target of the pending command, if any.
    pub fn pending(&self) -> Option<bool> {
        self.in_flight
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Flips the displayed value and returns the target to send.
    ///
    /// Returns `None` while another command is still in flight.
    pub fn begin(&mut self) -> Option<bool> {
        if self.in_flight.is_some() {
            return None;
        }
        let target = !self.displayed;
        self.displayed = target;
        self.in_flight = Some(target);
        Some(target)
    }

    /// Commits the store-acknowledged membership.
    pub fn confirm(&mut self, member: bool) {
        self.confirmed = member;
        self.displayed = member;
        self.in_flight = None;
    }

    /// Restores the last confirmed value after a failed command.
    pub fn revert(&mut self) {
        self.displayed = self.confirmed;
        self.in_flight = None;
    }

    /// Applies a fresh store read. Ignored while a command is in flight so
    /// the pending flip is not clobbered by a stale read.
    pub fn reconcile(&mut self, member: bool) -> bool {
        if self.in_flight.is_some() {
            return false;
        }
        self.confirmed = member;
        self.displayed = member;
        true
    }
}
