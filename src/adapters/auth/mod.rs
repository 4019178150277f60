//! Authentication adapters.
//!
//! Implementations of the `SessionProvider` port:
//!
//! - `static_session` - In-process session slot for tests, demos and the CLI

mod static_session;

pub use static_session::StaticSessionProvider;
