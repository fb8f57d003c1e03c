//! Core scoring logic - pure, deterministic, and testable
//!
//! This crate contains the match rules, the scoring state machine and the
//! summary records derived from it. It has no dependencies on UI or storage,
//! making it:
//!
//! - **Deterministic**: The same point sequence always produces the same state
//! - **Testable**: Every rule is reachable through two scoring calls and reset
//! - **Portable**: Can run behind a terminal, a watch face, or a headless service
//!
//! # Module Structure
//!
//! - [`rules`]: Closing conditions for tiebreaks, sets and the match
//! - [`state`]: `MatchState` and its derived display strings
//! - [`scorer`]: `MatchScorer`, the points → games → sets → match state machine
//! - [`record`]: `MatchRecord` and the record builder
//! - [`shared`]: `SharedScorer`, a lock around one scorer for multi-threaded hosts
//!
//! # Match Rules
//!
//! - **Games**: 0, 15, 30, 40; 40-40 goes straight to advantage, a lost
//!   advantage goes back to deuce
//! - **Sets**: First to 6 games with a 2-game lead
//! - **Tiebreak**: At 6-6, first to 7 points with a 2-point lead, recorded 7-6
//! - **Match**: Best of three sets
//!
//! # Example
//!
//! ```
//! use padel_scorer_core::{MatchScorer, ScoreEvent};
//! use padel_scorer_types::Side;
//!
//! let mut scorer = MatchScorer::new();
//!
//! for _ in 0..3 {
//!     scorer.score_point(Side::Us);
//! }
//! assert_eq!(scorer.state().points_display(), "40 - 0");
//!
//! assert_eq!(scorer.score_point(Side::Us), ScoreEvent::GameWon(Side::Us));
//! assert_eq!(scorer.state().games_display(), "1 - 0");
//! assert_eq!(scorer.state().status_text(), "Set 1");
//! ```

pub mod record;
pub mod rules;
pub mod scorer;
pub mod shared;
pub mod state;

pub use padel_scorer_types as types;

// Re-export commonly used types for convenience
pub use record::{build_record, build_record_with, MatchRecord};
pub use scorer::{MatchScorer, ScoreEvent};
pub use shared::SharedScorer;
pub use state::{MatchState, TiebreakState};
