//! TOML config file loading and creation.

use std::path::{Path, PathBuf};

use neurobuddy_common::ConfigError;
use tracing::{info, warn};

use crate::schema::NeuroBuddyConfig;
use crate::validation;

/// Template written when no config file exists yet. Everything is
/// commented out; the defaults apply until a line is uncommented.
const CONFIG_TEMPLATE: &str = r#"# NeuroBuddy configuration.
# All values are optional; the defaults below apply when a line is
# commented out. The API credential is read from the GEMINI_API_KEY
# environment variable, never from this file.

[model]
# name = "gemini-2.5-flash"
# max_output_tokens = 4096
# temperature = 0.7
# search_grounding = true

[chat]
# system_instruction = "..."
# apology = "Lo siento, ocurrió un error al procesar tu solicitud. Por favor, inténtalo de nuevo."
"#;

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// After loading, the config is validated; if validation fails, a warning
/// is logged and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<NeuroBuddyConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: NeuroBuddyConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e} — using parsed config as-is");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/neurobuddy/config.toml`.
///
/// If the file does not exist, creates a commented template and returns
/// defaults.
pub fn load_default() -> Result<NeuroBuddyConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::ParseError(msg)) if msg.contains("failed to read") => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(NeuroBuddyConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Platform default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir()
        .ok_or_else(|| ConfigError::PathError("could not determine config directory".into()))?;
    Ok(base.join("neurobuddy").join("config.toml"))
}

/// Write the commented default template at `path`, creating parent
/// directories as needed.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| ConfigError::WriteError(format!("{}: {e}", parent.display())))?;
    }
    std::fs::write(path, CONFIG_TEMPLATE)
        .map_err(|e| ConfigError::WriteError(format!("{}: {e}", path.display())))?;
    Ok(())
}
