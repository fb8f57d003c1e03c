//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s. The mapping
//! is stateless; what a command means on the current screen is decided by
//! the app.

pub mod map;

pub use padel_scorer_types as types;

pub use map::{handle_key_event, should_quit};
