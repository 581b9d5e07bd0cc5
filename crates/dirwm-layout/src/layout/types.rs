//! Layout engine types and configuration.

/// Configuration for the flow layout engine that positions panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutEngine {
    /// Columns added after each pane's width before the next pane starts.
    pub gap: usize,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self { gap: 2 }
    }
}
