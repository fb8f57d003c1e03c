//! Runtime configuration from environment variables.
//!
//! - `PADEL_HISTORY_PATH`: history file (default: `<data dir>/padel-scorer/history.json`)
//! - `PADEL_LOG_PATH`: log file (default: `padel-scorer.log` next to the history file)
//! - `PADEL_RENDER_INTERVAL_MS`: redraw interval for unchanged screens (default: 250)
//!
//! Empty values count as unset. Log verbosity comes from `RUST_LOG`.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_RENDER_INTERVAL_MS: u64 = 250;

const APP_DIR: &str = "padel-scorer";
const HISTORY_FILE: &str = "history.json";
const FALLBACK_HISTORY_FILE: &str = "padel-history.json";
const LOG_FILE: &str = "padel-scorer.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub history_path: PathBuf,
    pub log_path: PathBuf,
    pub render_interval_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl AppConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let history_path = get("PADEL_HISTORY_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(default_history_path);

        let log_path = get("PADEL_LOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| history_path.with_file_name(LOG_FILE));

        let render_interval_ms = get("PADEL_RENDER_INTERVAL_MS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_RENDER_INTERVAL_MS);

        Self {
            history_path,
            log_path,
            render_interval_ms,
        }
    }
}

fn default_history_path() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join(APP_DIR).join(HISTORY_FILE),
        None => PathBuf::from(FALLBACK_HISTORY_FILE),
    }
}
