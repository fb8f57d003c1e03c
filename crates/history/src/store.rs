//! HistoryStore: the most-recent-first record list plus its backend.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::MatchRecord;
use crate::storage::Storage;

pub struct HistoryStore<S: Storage> {
    storage: S,
    matches: Vec<MatchRecord>,
}

impl<S: Storage> HistoryStore<S> {
    /// Open the history, loading whatever the backend holds.
    ///
    /// A failed load is logged and starts from an empty history.
    pub fn open(mut storage: S) -> Self {
        let matches = match storage.load() {
            Ok(matches) => {
                debug!(count = matches.len(), "history loaded");
                matches
            }
            Err(e) => {
                warn!(error = %e, "failed to load match history; starting empty");
                Vec::new()
            }
        };
        Self { storage, matches }
    }

    /// All records, most recent first.
    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    pub fn get(&self, index: usize) -> Option<&MatchRecord> {
        self.matches.get(index)
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Add a record at the front.
    pub fn save(&mut self, record: MatchRecord) {
        info!(id = %record.id, sets = %record.sets_display(), us_won = record.us_won, "match saved");
        self.matches.insert(0, record);
        self.persist();
    }

    /// Remove the record at `index`, if present.
    pub fn delete_at(&mut self, index: usize) -> Option<MatchRecord> {
        if index >= self.matches.len() {
            return None;
        }
        let removed = self.matches.remove(index);
        self.persist();
        Some(removed)
    }

    /// Remove several records by position. Offsets refer to the list before
    /// any removal; out-of-range and repeated offsets are ignored.
    pub fn delete_offsets(&mut self, offsets: &[usize]) -> usize {
        let mut sorted: Vec<usize> = offsets
            .iter()
            .copied()
            .filter(|&i| i < self.matches.len())
            .collect();
        sorted.sort_unstable();
        sorted.dedup();

        for &i in sorted.iter().rev() {
            self.matches.remove(i);
        }
        if !sorted.is_empty() {
            self.persist();
        }
        sorted.len()
    }

    /// Remove the record with `id`. Returns whether one was found.
    pub fn delete_id(&mut self, id: Uuid) -> bool {
        let before = self.matches.len();
        self.matches.retain(|m| m.id != id);
        let removed = self.matches.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    pub fn clear(&mut self) {
        self.matches.clear();
        self.persist();
    }

    fn persist(&mut self) {
        if let Err(e) = self.storage.store(&self.matches) {
            warn!(error = %e, "failed to persist match history");
        }
    }
}
