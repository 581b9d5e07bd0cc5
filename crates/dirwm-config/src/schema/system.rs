//! System configuration types: logging.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// The `tracing` directive for this level, scoped to dirwm crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "dirwm=trace",
            LogLevel::Debug => "dirwm=debug",
            LogLevel::Info => "dirwm=info",
            LogLevel::Warn => "dirwm=warn",
            LogLevel::Error => "dirwm=error",
        }
    }
}

/// Logging configuration.
///
/// The terminal belongs to the UI, so log lines go to a file. When `file`
/// is unset the platform data directory is used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub file: Option<PathBuf>,
}
