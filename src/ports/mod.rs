//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Store Ports
//!
//! - `EventRepository` - Event reads and the live event listing
//! - `PostRepository` - Showcase post reads
//! - `MembershipStore` - Idempotent favorite/like commands and queries
//! - `RegistrationRepository` - Registration persistence
//!
//! ## Collaborator Ports
//!
//! - `SessionProvider` - The signed-in user from the auth collaborator
//! - `StatusSource` - Backend health for the admin dashboard

mod event_repository;
mod membership_store;
mod post_repository;
mod registration_repository;
mod session_provider;
mod status_source;

pub use event_repository::EventRepository;
pub use membership_store::MembershipStore;
pub use post_repository::PostRepository;
pub use registration_repository::RegistrationRepository;
pub use session_provider::SessionProvider;
pub use status_source::{StatusError, StatusSource};
