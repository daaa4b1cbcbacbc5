//! Soft-failing session factory.
//!
//! A missing or empty credential yields `None` instead of an error so
//! the caller can show a degraded UI state and keep running.

use tracing::{error, info};

use crate::gemini::{GeminiClient, GeminiConfig};

use super::manager::ChatSession;

/// Environment variable holding the Gemini API credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Everything a session is bound to at creation time.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub model: String,
    pub system_instruction: String,
    pub max_output_tokens: u32,
    pub temperature: f64,
    pub search_grounding: bool,
}

/// Create a chat session against the Gemini API.
///
/// Reads the credential from `GEMINI_API_KEY`. Returns `None` when the
/// variable is absent or blank.
pub fn create_session(options: SessionOptions) -> Option<ChatSession> {
    create_session_with_key(std::env::var(API_KEY_ENV).ok(), options)
}

pub(crate) fn create_session_with_key(
    api_key: Option<String>,
    options: SessionOptions,
) -> Option<ChatSession> {
    let api_key = match api_key {
        Some(key) if !key.trim().is_empty() => key,
        _ => {
            error!("{API_KEY_ENV} is not set; chat session disabled");
            return None;
        }
    };

    let config = GeminiConfig::new(api_key)
        .with_model(&options.model)
        .with_max_output_tokens(options.max_output_tokens)
        .with_temperature(options.temperature)
        .with_search_grounding(options.search_grounding);

    let session = ChatSession::new(Box::new(GeminiClient::new(config)))
        .with_system_instruction(options.system_instruction);

    info!(session = %session.id(), model = %options.model, "chat session created");
    Some(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> SessionOptions {
        SessionOptions {
            model: "gemini-2.5-flash".to_string(),
            system_instruction: "solo pares craneales".to_string(),
            max_output_tokens: 4096,
            temperature: 0.7,
            search_grounding: true,
        }
    }

    #[test]
    fn missing_key_yields_none() {
        assert!(create_session_with_key(None, options()).is_none());
    }

    #[test]
    fn blank_key_yields_none() {
        assert!(create_session_with_key(Some("   ".into()), options()).is_none());
    }

    #[test]
    fn valid_key_yields_a_bound_session() {
        let session = create_session_with_key(Some("test-key".into()), options()).unwrap();
        assert_eq!(session.system_instruction(), Some("solo pares craneales"));
        assert_eq!(session.message_count(), 0);
    }
}
