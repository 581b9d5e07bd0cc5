//! Keybind parsing and validation utilities.

use crate::schema::KeybindConfig;
use dirwm_common::ConfigError;
use std::collections::HashMap;

/// A key the UI can bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Esc,
}

/// A parsed binding: one key plus an optional Ctrl modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: Key,
    pub ctrl: bool,
}

impl KeyBinding {
    /// Parse `"q"`, `"Esc"` or `"Ctrl+C"` style bindings.
    pub fn parse(binding: &str) -> Result<Self, ConfigError> {
        let trimmed = binding.trim();
        let (ctrl, key) = match trimmed.split_once('+') {
            Some((modifier, key)) if modifier.eq_ignore_ascii_case("ctrl") => (true, key),
            Some((modifier, _)) => {
                return Err(ConfigError::ValidationError(format!(
                    "unsupported modifier '{modifier}' in keybind '{binding}'"
                )))
            }
            None => (false, trimmed),
        };

        let key = if key.eq_ignore_ascii_case("esc") || key.eq_ignore_ascii_case("escape") {
            Key::Esc
        } else {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                // Terminals report Ctrl+<letter> as the lowercase letter.
                (Some(c), None) if ctrl => Key::Char(c.to_ascii_lowercase()),
                (Some(c), None) => Key::Char(c),
                _ => {
                    return Err(ConfigError::ValidationError(format!(
                        "invalid keybind '{binding}'"
                    )))
                }
            }
        };

        Ok(Self { key, ctrl })
    }
}

/// Returns all keybinds as `(name, binding)` pairs.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&str, &str)> {
    vec![("quit", &config.quit), ("interrupt", &config.interrupt)]
}

/// Parse every configured binding.
pub fn parse_all(config: &KeybindConfig) -> Result<Vec<KeyBinding>, ConfigError> {
    all_keybinds(config)
        .into_iter()
        .map(|(_, binding)| KeyBinding::parse(binding))
        .collect()
}

/// Validate that no two keybinds are mapped to the same key combination.
pub fn validate_no_duplicates(config: &KeybindConfig) -> Result<(), ConfigError> {
    let binds = all_keybinds(config);
    let mut seen: HashMap<KeyBinding, &str> = HashMap::new();

    for (name, binding) in &binds {
        let parsed = KeyBinding::parse(binding)?;
        if let Some(existing_name) = seen.get(&parsed) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate keybind '{binding}': assigned to both '{existing_name}' and '{name}'"
            )));
        }
        seen.insert(parsed, name);
    }

    Ok(())
}
