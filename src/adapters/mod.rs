//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - In-memory store for events, posts, memberships and registrations
//! - `auth` - Session providers
//! - `status` - HTTP status source and the polling monitor

pub mod auth;
pub mod memory;
pub mod status;

pub use auth::StaticSessionProvider;
pub use memory::InMemoryStore;
pub use status::{HttpStatusSource, MonitorHandle, StatusMonitor, StatusMonitorConfig};
