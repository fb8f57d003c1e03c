//! Thread-safe handle around a single scorer.
//!
//! Scoring touches several fields at once, so every call runs under one
//! lock. Hosts that score from a single thread can use
//! [`MatchScorer`](crate::MatchScorer) directly.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::record::MatchRecord;
use crate::scorer::{MatchScorer, ScoreEvent};
use crate::state::MatchState;
use crate::types::Side;

#[derive(Debug, Clone, Default)]
pub struct SharedScorer {
    inner: Arc<Mutex<MatchScorer>>,
}

impl SharedScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score_point(&self, side: Side) -> ScoreEvent {
        self.lock().score_point(side)
    }

    pub fn reset(&self) {
        self.lock().reset();
    }

    pub fn end_early(&self) -> Option<MatchRecord> {
        self.lock().end_early()
    }

    pub fn snapshot(&self) -> MatchState {
        self.lock().snapshot()
    }

    fn lock(&self) -> MutexGuard<'_, MatchScorer> {
        // Transitions never panic mid-update, so a poisoned lock still
        // guards a consistent state.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
