//! Core TOML config loading: read from path or platform default.

use crate::schema::DirwmConfig;
use crate::validation;
use dirwm_common::ConfigError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

use super::paths::default_config_path;

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// After loading, the config is validated; if validation fails, a warning
/// is logged and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<DirwmConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config: DirwmConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}, using parsed config with potentially invalid values");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// A missing file is not an error: defaults are returned and nothing is
/// written to disk.
pub fn load_default() -> Result<DirwmConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, using defaults", path.display());
            Ok(DirwmConfig::default())
        }
        Err(e) => Err(e),
    }
}
