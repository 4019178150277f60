//! Registration window declared on an event.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, ValidationError};

/// Capacity and open/close times for registrations.
///
/// Every field is optional; a window with nothing set admits everyone at any
/// time. Events created before registration existed carry no window at all
/// (`Event::registration == None`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationWindow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opens_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closes_at: Option<Timestamp>,
}

impl RegistrationWindow {
    /// Creates a window limited only by capacity.
    pub fn with_capacity(capacity: u32) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::default()
        }
    }

    /// Sets the open and close times, rejecting a close before the open.
    pub fn between(mut self, opens_at: Timestamp, closes_at: Timestamp) -> Result<Self, ValidationError> {
        if closes_at.is_before(&opens_at) {
            return Err(ValidationError::invalid_format(
                "closes_at",
                "registration cannot close before it opens",
            ));
        }
        self.opens_at = Some(opens_at);
        self.closes_at = Some(closes_at);
        Ok(self)
    }

    /// Returns true when `now` falls inside the open/close times.
    pub fn accepts_at(&self, now: Timestamp) -> bool {
        let opened = self.opens_at.map_or(true, |t| !now.is_before(&t));
        let not_closed = self.closes_at.map_or(true, |t| !now.is_after(&t));
        opened && not_closed
    }

    /// `max(0, capacity - active)`, or `None` when capacity is unlimited.
    pub fn spots_left(&self, active_registrations: u32) -> Option<u32> {
        self.capacity
            .map(|capacity| capacity.saturating_sub(active_registrations))
    }
}
