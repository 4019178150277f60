//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, auth session)
//! - `event` - Campus events and registration windows
//! - `post` - Showcase posts on the social feed
//! - `engagement` - Favorites and likes as membership sets, optimistic toggles
//! - `registration` - Registration lifecycle, feedback, availability banner
//! - `discovery` - Text and category filtering
//! - `monitoring` - Backend status for the admin dashboard

pub mod discovery;
pub mod engagement;
pub mod event;
pub mod foundation;
pub mod monitoring;
pub mod post;
pub mod registration;
