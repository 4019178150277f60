//! Talent Hub - client core for a university talent and events hub
//!
//! Students browse campus events and showcase posts, favorite and like them,
//! and register for events. This crate holds the logic between the UI and the
//! hosted document store: membership resolution, idempotent toggles with
//! optimistic display, search filtering, registration availability, and the
//! admin dashboard's backend status poller.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
