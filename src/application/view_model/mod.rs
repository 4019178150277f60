//! View-models: UI-facing state that outlives a single handler call.
//!
//! Async completions hold only `Weak` references to a view-model, so a
//! result arriving after the screen closed is discarded.

mod event_feed;
mod membership_toggle;

pub use event_feed::EventFeedViewModel;
pub use membership_toggle::{MembershipToggleViewModel, SharedToggle, ToggleOutcome};
