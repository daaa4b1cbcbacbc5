//! Configuration schema types for NeuroBuddy.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults matching current behavior.

use serde::{Deserialize, Serialize};

/// System instruction restricting the assistant's domain to the twelve
/// cranial nerves. Sent once per session at creation time.
pub const DEFAULT_SYSTEM_INSTRUCTION: &str = r#"Eres un chatbot experto en neuroanatomía llamado "NeuroBuddy". Tu función principal es educar y responder preguntas con precisión sobre los **12 Pares Craneales** (su nombre, número, tipo -sensitivo, motor, mixto-, función y foramen de salida).
Mantén un tono profesional, claro y de tutor.
Si la pregunta no está relacionada con los pares craneales, la visión, el olfato, la audición o la anatomía de la cabeza/cuello, responde amablemente que tu experiencia se limita a los nervios craneales."#;

/// Shown in place of a model answer when a request fails.
pub const DEFAULT_APOLOGY: &str =
    "Lo siento, ocurrió un error al procesar tu solicitud. Por favor, inténtalo de nuevo.";

/// Root configuration for NeuroBuddy.
///
/// All options have sensible defaults; only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NeuroBuddyConfig {
    pub model: ModelConfig,
    pub chat: ChatConfig,
}

/// Which Gemini model to talk to and how.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Gemini model identifier.
    pub name: String,
    /// Generation budget per response.
    pub max_output_tokens: u32,
    /// Sampling temperature, 0.0 to 2.0.
    pub temperature: f64,
    /// Enable the Google Search grounding tool.
    pub search_grounding: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "gemini-2.5-flash".to_string(),
            max_output_tokens: 4096,
            temperature: 0.7,
            search_grounding: true,
        }
    }
}

/// Conversation-facing strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// System instruction sent at session creation.
    pub system_instruction: String,
    /// Fixed apology shown when a request fails.
    pub apology: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.to_string(),
            apology: DEFAULT_APOLOGY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_config() {
        let config = NeuroBuddyConfig::default();
        assert_eq!(config.model.name, "gemini-2.5-flash");
        assert_eq!(config.model.max_output_tokens, 4096);
        assert_eq!(config.model.temperature, 0.7);
        assert!(config.model.search_grounding);
    }

    #[test]
    fn default_chat_strings_are_spanish() {
        let config = NeuroBuddyConfig::default();
        assert!(config.chat.system_instruction.contains("NeuroBuddy"));
        assert!(config.chat.system_instruction.contains("12 Pares Craneales"));
        assert!(config.chat.apology.starts_with("Lo siento"));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: NeuroBuddyConfig = toml::from_str(
            r#"
[model]
name = "gemini-2.0-flash"
temperature = 0.2
"#,
        )
        .unwrap();
        assert_eq!(config.model.name, "gemini-2.0-flash");
        assert_eq!(config.model.temperature, 0.2);
        // Defaults preserved
        assert_eq!(config.model.max_output_tokens, 4096);
        assert!(config.model.search_grounding);
        assert!(config.chat.apology.starts_with("Lo siento"));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = NeuroBuddyConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: NeuroBuddyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.model.name, "gemini-2.5-flash");
        assert_eq!(parsed.chat.apology, DEFAULT_APOLOGY);
    }
}
