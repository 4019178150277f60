//! Registration banner status for an event.
//!
//! Precedence, highest first:
//! 1. the user already holds an active registration;
//! 2. the event has no registration window (legacy events): open;
//! 3. outside the window's open/close times: closed;
//! 4. capacity exhausted: closed;
//! 5. 10 or fewer spots left: spots low;
//! 6. otherwise open.

use serde::{Deserialize, Serialize};

use crate::domain::event::{Event, RegistrationWindow};
use crate::domain::foundation::Timestamp;

/// At or below this many remaining spots the banner warns.
pub const SPOTS_LOW_THRESHOLD: u32 = 10;

/// What the registration banner should say.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AvailabilityStatus {
    RegistrationOpen,
    SpotsLow,
    RegistrationClosed,
    UserAlreadyRegistered,
}

impl AvailabilityStatus {
    /// Stable identifier used by the presentation layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            AvailabilityStatus::RegistrationOpen => "registration-open",
            AvailabilityStatus::SpotsLow => "spots-low",
            AvailabilityStatus::RegistrationClosed => "registration-closed",
            AvailabilityStatus::UserAlreadyRegistered => "user-already-registered",
        }
    }
}

/// Derived availability of an event for one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationAvailability {
    pub status: AvailabilityStatus,

    /// `None` when capacity is unlimited or undeclared.
    pub spots_left: Option<u32>,
}

impl RegistrationAvailability {
    /// Derives availability from the event's window and the active count.
    pub fn derive(
        window: Option<&RegistrationWindow>,
        active_registrations: u32,
        already_registered: bool,
        now: Timestamp,
    ) -> Self {
        let spots_left = window.and_then(|w| w.spots_left(active_registrations));

        let status = match window {
            _ if already_registered => AvailabilityStatus::UserAlreadyRegistered,
            None => AvailabilityStatus::RegistrationOpen,
            Some(w) if !w.accepts_at(now) => AvailabilityStatus::RegistrationClosed,
            Some(_) => match spots_left {
                Some(0) => AvailabilityStatus::RegistrationClosed,
                Some(n) if n <= SPOTS_LOW_THRESHOLD => AvailabilityStatus::SpotsLow,
                _ => AvailabilityStatus::RegistrationOpen,
            },
        };

        Self { status, spots_left }
    }

    /// Convenience over [`derive`](Self::derive) for a loaded event.
    pub fn for_event(
        event: &Event,
        active_registrations: u32,
        already_registered: bool,
        now: Timestamp,
    ) -> Self {
        Self::derive(
            event.registration.as_ref(),
            active_registrations,
            already_registered,
            now,
        )
    }

    /// True when the register button should be enabled.
    pub fn can_register(&self) -> bool {
        matches!(
            self.status,
            AvailabilityStatus::RegistrationOpen | AvailabilityStatus::SpotsLow
        )
    }

    /// True when the "only N spots left" banner should show.
    pub fn shows_spots_low_banner(&self) -> bool {
        matches!(self.spots_left, Some(n) if n > 0 && n <= SPOTS_LOW_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn now() -> Timestamp {
        Timestamp::from_unix_secs(1_000_000).unwrap()
    }

    fn capacity(c: u32) -> RegistrationWindow {
        RegistrationWindow::with_capacity(c)
    }

    #[test]
    fn full_event_is_closed_for_unregistered_user() {
        let availability = RegistrationAvailability::derive(Some(&capacity(5)), 5, false, now());
        assert_eq!(availability.status, AvailabilityStatus::RegistrationClosed);
        assert_eq!(availability.spots_left, Some(0));
        assert!(!availability.can_register());
    }

    #[test]
    fn legacy_event_without_window_is_open() {
        let availability = RegistrationAvailability::derive(None, 10_000, false, now());
        assert_eq!(availability.status, AvailabilityStatus::RegistrationOpen);
        assert_eq!(availability.spots_left, None);
        assert!(availability.can_register());
    }

    #[test]
    fn window_without_capacity_is_open() {
        let window = RegistrationWindow::default();
        let availability = RegistrationAvailability::derive(Some(&window), 500, false, now());
        assert!(availability.can_register());
        assert!(!availability.shows_spots_low_banner());
    }

    #[test]
    fn ten_spots_left_is_low() {
        let availability = RegistrationAvailability::derive(Some(&capacity(30)), 20, false, now());
        assert_eq!(availability.status, AvailabilityStatus::SpotsLow);
        assert!(availability.can_register());
        assert!(availability.shows_spots_low_banner());
    }

    #[test]
    fn eleven_spots_left_is_open() {
        let availability = RegistrationAvailability::derive(Some(&capacity(31)), 20, false, now());
        assert_eq!(availability.status, AvailabilityStatus::RegistrationOpen);
        assert!(!availability.shows_spots_low_banner());
    }

    #[test]
    fn window_not_yet_open_is_closed() {
        let window = capacity(100)
            .between(now().add_days(1), now().add_days(2))
            .unwrap();
        let availability = RegistrationAvailability::derive(Some(&window), 0, false, now());
        assert_eq!(availability.status, AvailabilityStatus::RegistrationClosed);
    }

    #[test]
    fn window_past_close_is_closed() {
        let window = RegistrationWindow::default()
            .between(now().add_days(-2), now().add_days(-1))
            .unwrap();
        let availability = RegistrationAvailability::derive(Some(&window), 0, false, now());
        assert!(!availability.can_register());
    }

    #[test]
    fn already_registered_overrides_legacy_mode() {
        let availability = RegistrationAvailability::derive(None, 0, true, now());
        assert_eq!(availability.status, AvailabilityStatus::UserAlreadyRegistered);
        assert!(!availability.can_register());
    }

    #[test]
    fn status_identifiers_are_kebab_case() {
        assert_eq!(AvailabilityStatus::SpotsLow.as_str(), "spots-low");
        assert_eq!(
            serde_json::to_string(&AvailabilityStatus::UserAlreadyRegistered).unwrap(),
            "\"user-already-registered\""
        );
    }

    proptest! {
        #[test]
        fn spots_left_is_saturating_difference(c in 0u32..500, r in 0u32..500) {
            let availability = RegistrationAvailability::derive(Some(&capacity(c)), r, false, now());
            prop_assert_eq!(availability.spots_left, Some(c.saturating_sub(r)));
        }

        #[test]
        fn spots_low_banner_iff_between_one_and_ten(c in 0u32..100, r in 0u32..100) {
            let availability = RegistrationAvailability::derive(Some(&capacity(c)), r, false, now());
            let left = c.saturating_sub(r);
            prop_assert_eq!(availability.shows_spots_low_banner(), left > 0 && left <= 10);
            prop_assert_eq!(
                availability.status == AvailabilityStatus::SpotsLow,
                left > 0 && left <= 10
            );
        }

        #[test]
        fn already_registered_never_can_register(
            c in proptest::option::of(0u32..100),
            r in 0u32..100,
        ) {
            let window = c.map(capacity);
            let availability = RegistrationAvailability::derive(window.as_ref(), r, true, now());
            prop_assert!(!availability.can_register());
        }
    }
}
