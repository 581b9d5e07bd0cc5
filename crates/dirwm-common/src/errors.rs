use std::path::PathBuf;

use crate::types::WindowId;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum FsError {
    #[error("failed to scan {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to resolve working directory: {0}")]
    WorkingDir(#[source] std::io::Error),

    #[error("watch error: {0}")]
    Watch(String),
}

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("view not found: {0}")]
    ViewNotFound(WindowId),
}

impl UiError {
    /// A pane that is not on screen yet is expected while a window is being
    /// created; callers skip it instead of failing.
    pub fn is_view_not_found(&self) -> bool {
        matches!(self, UiError::ViewNotFound(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DirwmError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fs(#[from] FsError),

    #[error(transparent)]
    Ui(#[from] UiError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
