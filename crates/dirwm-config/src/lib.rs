//! dirwm configuration system.
//!
//! Provides TOML-based configuration with validation. All config sections
//! use sensible defaults so partial configs work out of the box, and a
//! missing config file simply means "all defaults".
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use dirwm_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("watching {}", config.watch.root.display());
//! ```

pub mod keybinds;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use keybinds::KeyBinding;
pub use schema::DirwmConfig;

use dirwm_common::ConfigError;

/// Convenience function to load config from the platform default path.
pub fn load_config() -> Result<DirwmConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}
