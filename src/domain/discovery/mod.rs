//! Discovery module - text and category filtering over loaded entities.
//!
//! The whole list is already on the client, so filtering is a pure pass
//! re-run on every keystroke or chip toggle.

mod filter;

pub use filter::{EntityFilter, Searchable};
