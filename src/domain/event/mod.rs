//! Event module - campus events and their registration windows.

mod entity;
mod registration_window;

pub use entity::Event;
pub use registration_window::RegistrationWindow;
