//! Configuration schema types for dirwm.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod keybind_config;
mod layout;
mod system;
mod watch;

pub use keybind_config::*;
pub use layout::*;
pub use system::*;
pub use watch::*;

use serde::{Deserialize, Serialize};

/// Root configuration for dirwm.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DirwmConfig {
    pub watch: WatchConfig,
    pub layout: LayoutConfig,
    pub keybinds: KeybindConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
