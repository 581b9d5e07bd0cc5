//! Full configuration validation.
//!
//! Validates numeric ranges and keybinds, collecting every problem into a
//! single `ConfigError`.

mod helpers;
mod layout;


use crate::keybinds;
use crate::schema::DirwmConfig;
use dirwm_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &DirwmConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keybinds::validate_no_duplicates(&config.keybinds) {
        errors.push(e.to_string());
    }

    layout::validate_layout(&mut errors, config);

    if config.watch.root.as_os_str().is_empty() {
        errors.push("watch.root must not be empty".into());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
