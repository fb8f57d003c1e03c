//! Storage backends for the match history.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::MatchRecord;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("history encoding: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where the history list lives between runs.
pub trait Storage {
    /// Read the full list, most recent first.
    fn load(&mut self) -> Result<Vec<MatchRecord>, HistoryError>;

    /// Replace the stored list.
    fn store(&mut self, records: &[MatchRecord]) -> Result<(), HistoryError>;
}

/// History kept as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: io::Error) -> HistoryError {
        HistoryError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Storage for JsonFileStorage {
    fn load(&mut self) -> Result<Vec<MatchRecord>, HistoryError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            // Nothing saved yet.
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_err(e)),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn store(&mut self, records: &[MatchRecord]) -> Result<(), HistoryError> {
        let bytes = serde_json::to_vec(records)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
            }
        }

        // Write then rename so a crash never leaves a half-written file.
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, &bytes).map_err(|e| self.io_err(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_err(e))?;
        Ok(())
    }
}

/// In-process storage for tests and headless hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    records: Vec<MatchRecord>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds `records` (most recent first).
    pub fn with_records(records: Vec<MatchRecord>) -> Self {
        Self { records, writes: 0 }
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    /// Number of successful `store` calls.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Storage for MemoryStorage {
    fn load(&mut self) -> Result<Vec<MatchRecord>, HistoryError> {
        Ok(self.records.clone())
    }

    fn store(&mut self, records: &[MatchRecord]) -> Result<(), HistoryError> {
        self.records = records.to_vec();
        self.writes += 1;
        Ok(())
    }
}
