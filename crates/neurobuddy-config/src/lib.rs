//! NeuroBuddy configuration system.
//!
//! Provides TOML-based configuration with full validation. All sections
//! use sensible defaults so partial configs work out of the box. The API
//! credential is deliberately NOT part of the config file; it comes from
//! the environment only.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::NeuroBuddyConfig;
pub use toml_loader::{default_config_path, load_from_path};

use neurobuddy_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creating a default
/// file if none exists, and validates the result.
pub fn load_config() -> Result<NeuroBuddyConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}
