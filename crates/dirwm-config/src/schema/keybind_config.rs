//! Keyboard shortcuts configuration types.
//!
//! Named `keybind_config` to avoid clash with the crate-level `keybinds` module.

use serde::{Deserialize, Serialize};

/// Keyboard shortcuts configuration.
///
/// Format: a single key (`"q"`, `"Esc"`) optionally prefixed by `Ctrl+`.
/// Both bindings lead to the same quit path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub quit: String,
    pub interrupt: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            quit: "q".into(),
            interrupt: "Ctrl+C".into(),
        }
    }
}
