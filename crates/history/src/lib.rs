//! Match history - the persisted, most-recent-first list of match records
//!
//! [`HistoryStore`] is the collaborator the scorer hands finished records
//! to. It keeps the list in memory and writes it through a [`Storage`]
//! backend after every mutation.
//!
//! # Failure Policy
//!
//! Storage problems never reach the scorer or the UI:
//!
//! - A history that cannot be read or decoded is logged and treated as empty
//! - A history that cannot be written is logged; the in-memory list stays
//!   authoritative and the next successful write catches the file up
//!
//! # Example
//!
//! ```
//! use padel_scorer_core::{MatchScorer, ScoreEvent};
//! use padel_scorer_core::types::Side;
//! use padel_scorer_history::{HistoryStore, MemoryStorage};
//!
//! let mut history = HistoryStore::open(MemoryStorage::new());
//! let mut scorer = MatchScorer::new();
//!
//! for _ in 0..48 {
//!     if let ScoreEvent::MatchComplete(record) = scorer.score_point(Side::Us) {
//!         history.save(record);
//!     }
//! }
//!
//! assert_eq!(history.len(), 1);
//! assert_eq!(history.matches()[0].set_scores, vec!["6-0", "6-0"]);
//! ```

pub mod storage;
pub mod store;

pub use padel_scorer_core as core;

pub use storage::{HistoryError, JsonFileStorage, MemoryStorage, Storage};
pub use store::HistoryStore;
