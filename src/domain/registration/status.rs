//! RegistrationStatus enum for tracking lifecycle of event registrations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle status of a registration.
///
/// Transitions only move forward: pending → confirmed, and pending or
/// confirmed → attended or cancelled. Attended and cancelled are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    #[default]
    Pending,
    Confirmed,
    Attended,
    Cancelled,
}

impl RegistrationStatus {
    /// Active registrations hold a seat and block a second registration.
    pub fn is_active(&self) -> bool {
        !matches!(self, RegistrationStatus::Cancelled)
    }

    /// Feedback is collected from confirmed and attended registrations.
    pub fn accepts_feedback(&self) -> bool {
        matches!(
            self,
            RegistrationStatus::Confirmed | RegistrationStatus::Attended
        )
    }
}

impl StateMachine for RegistrationStatus {
    fn valid_transitions(&self) -> Vec<Self> {
        use RegistrationStatus::*;
        match self {
            Pending => vec![Confirmed, Attended, Cancelled],
            Confirmed => vec![Attended, Cancelled],
            Attended | Cancelled => vec![],
        }
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RegistrationStatus::Pending => "Pending",
            RegistrationStatus::Confirmed => "Confirmed",
            RegistrationStatus::Attended => "Attended",
            RegistrationStatus::Cancelled => "Cancelled",
        };
        write!(f, "{}", s)
    }
}
