//! Pane layout configuration types.

use serde::{Deserialize, Serialize};

/// Flow layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Columns between the right edge of one pane's width and the next
    /// pane's origin (valid range: 0-16).
    pub gap: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { gap: 2 }
    }
}

// =============================================================================
// Tests
// =============================================================================
