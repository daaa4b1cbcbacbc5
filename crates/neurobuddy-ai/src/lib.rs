//! AI engine for NeuroBuddy.
//!
//! Provides the Gemini API client with:
//! - Search-grounded generation (citation candidates from grounding metadata)
//! - Session management with replayed conversation history
//! - Token usage tracking
//! - A soft-failing session factory for missing credentials

pub mod gemini;
pub mod session;
pub mod usage;

use async_trait::async_trait;

pub use gemini::{GeminiClient, GeminiConfig};
pub use session::{create_session, ChatSession, SessionOptions, API_KEY_ENV};
pub use usage::UsageTotals;

#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn generate(&self, messages: &[Message]) -> Result<ChatReply, AiError>;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
    System,
}

/// One model response: verbatim text, loose citation candidates, and
/// token accounting. Candidates are not validated here; empty fields
/// are passed through for the caller to filter.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub text: String,
    pub citations: Vec<CitationCandidate>,
    pub usage: TokenUsage,
}

/// A grounding citation as the API reported it. Either field may be
/// empty when the corresponding metadata was missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitationCandidate {
    pub uri: String,
    pub title: String,
}

#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("Session is busy with another request")]
    Busy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_usage_total_saturates() {
        let usage = TokenUsage {
            input_tokens: u64::MAX,
            output_tokens: 1,
        };
        assert_eq!(usage.total_tokens(), u64::MAX);
    }

    #[test]
    fn ai_error_display() {
        assert_eq!(
            AiError::ApiError("HTTP 500".into()).to_string(),
            "API error: HTTP 500"
        );
        assert_eq!(AiError::RateLimited.to_string(), "Rate limited");
        assert_eq!(AiError::Timeout.to_string(), "Timeout");
        assert_eq!(
            AiError::Busy.to_string(),
            "Session is busy with another request"
        );
    }
}
