//! Config path resolution.

use dirwm_common::ConfigError;
use std::path::PathBuf;

pub(crate) const APP_NAME: &str = "dirwm";

/// Get the platform-specific default config file path.
///
/// On Linux: `~/.config/dirwm/config.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join(APP_NAME).join("config.toml"))
}
