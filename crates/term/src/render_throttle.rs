//! Redraw throttling for mostly static screens.
//!
//! A scoreboard only changes when a key is pressed, so frames are drawn when
//! the screen's fingerprint changes and otherwise at a slow refresh rate.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Decide whether to render a new frame.
    ///
    /// Renders on the first call, whenever `fingerprint` differs from the
    /// last rendered one, and otherwise at most once per
    /// `min_static_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let changed = !self.has_rendered || fingerprint != self.last_fingerprint;
        let stale = now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms;
        if !changed && !stale {
            return false;
        }

        self.has_rendered = true;
        self.last_render_ms = now_ms;
        self.last_fingerprint = fingerprint;
        true
    }

    /// Force the next `should_render` to return true (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.has_rendered = false;
    }
}

/// Fingerprint of anything that determines what is on screen.
pub fn fingerprint<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
