//! Padel Scorer (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and hosts the pieces
//! that tie them together for the terminal app: configuration and the
//! command-driven [`app::App`] controller.

pub mod app;
pub mod config;

pub use padel_scorer_core as core;
pub use padel_scorer_history as history;
pub use padel_scorer_input as input;
pub use padel_scorer_term as term;
pub use padel_scorer_types as types;

pub use app::{App, Pending, Screen};
pub use config::AppConfig;
