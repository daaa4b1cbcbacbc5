//! Config validation: bounds and non-empty checks.

use neurobuddy_common::ConfigError;

use crate::schema::NeuroBuddyConfig;

/// Validate a loaded config. Returns the first problem found.
pub fn validate(config: &NeuroBuddyConfig) -> Result<(), ConfigError> {
    if config.model.name.trim().is_empty() {
        return Err(ConfigError::ValidationError("model.name is empty".into()));
    }
    if config.model.max_output_tokens == 0 {
        return Err(ConfigError::ValidationError(
            "model.max_output_tokens must be greater than zero".into(),
        ));
    }
    if !(0.0..=2.0).contains(&config.model.temperature) {
        return Err(ConfigError::ValidationError(format!(
            "model.temperature {} is outside 0.0..=2.0",
            config.model.temperature
        )));
    }
    if config.chat.system_instruction.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "chat.system_instruction is empty".into(),
        ));
    }
    if config.chat.apology.trim().is_empty() {
        return Err(ConfigError::ValidationError("chat.apology is empty".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&NeuroBuddyConfig::default()).is_ok());
    }

    #[test]
    fn empty_model_name_is_rejected() {
        let mut config = NeuroBuddyConfig::default();
        config.model.name = "  ".into();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("model.name"));
    }

    #[test]
    fn zero_token_budget_is_rejected() {
        let mut config = NeuroBuddyConfig::default();
        config.model.max_output_tokens = 0;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("max_output_tokens"));
    }

    #[test]
    fn out_of_range_temperature_is_rejected() {
        let mut config = NeuroBuddyConfig::default();
        config.model.temperature = 3.0;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("temperature"));
    }

    #[test]
    fn empty_apology_is_rejected() {
        let mut config = NeuroBuddyConfig::default();
        config.chat.apology = String::new();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("apology"));
    }
}
