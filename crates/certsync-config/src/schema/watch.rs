//! File watching and debounce settings.

use serde::{Deserialize, Serialize};

/// Watch behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WatchConfig {
    /// Quiet period in milliseconds before a burst of changes is synced
    /// (valid range: 0-600000).
    pub debounce_ms: i64,
    /// Schedule one sync as soon as the daemon starts.
    pub sync_on_start: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 1000,
            sync_on_start: true,
        }
    }
}
