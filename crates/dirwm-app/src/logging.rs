//! File-backed `tracing` setup.
//!
//! The terminal belongs to the UI, so log lines go to a file. If the file
//! can't be opened, logs are discarded and the UI still runs.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use dirwm_config::schema::{LogLevel, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// `<data_dir>/dirwm/logs/dirwm.log`.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("dirwm").join("logs").join("dirwm.log"))
}

/// Build the filter from `RUST_LOG` plus `directive`.
pub fn build_filter(directive: &str) -> EnvFilter {
    let directives = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(env) if !env.trim().is_empty() => format!("{env},{directive}"),
        _ => directive.to_string(),
    };
    EnvFilter::try_new(&directives).unwrap_or_else(|e| {
        eprintln!("dirwm: invalid log filter {directives:?} ({e}), using defaults");
        EnvFilter::new(LogLevel::Info.directive())
    })
}

fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber. Returns the log file path in use, if any.
pub fn init(config: &LoggingConfig, directive_override: Option<&str>) -> Option<PathBuf> {
    let directive = directive_override.unwrap_or(config.level.directive());
    let filter = build_filter(directive);

    let path = config.file.clone().or_else(default_log_path);
    let file = path.as_deref().and_then(|p| match open_log_file(p) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("dirwm: cannot open log file {}: {e}", p.display());
            None
        }
    });

    match file {
        Some(file) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
            path
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::sink)
                .try_init();
            None
        }
    }
}
