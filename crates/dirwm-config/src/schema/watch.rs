//! Watched directory configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where windows come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Root directory; each subdirectory is one window.
    pub root: PathBuf,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./fs"),
        }
    }
}
