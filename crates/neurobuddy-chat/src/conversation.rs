//! Conversation data model.
//!
//! Turns are immutable once appended; the log is append-only and its
//! insertion order is the display order.

use serde::{Deserialize, Serialize};

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One grounding citation. Two sources are the same iff their `uri`
/// values are equal; the title plays no part in identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub uri: String,
    pub title: String,
}

/// One user message or one model response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub text: String,
    /// Deduplicated sources in first-occurrence order. Always empty for
    /// user turns.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Source>,
}

impl ConversationTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            sources: Vec::new(),
        }
    }

    pub fn model(text: impl Into<String>, sources: Vec<Source>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
            sources,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_turns_never_carry_sources() {
        let turn = ConversationTurn::user("¿Qué es el nervio vago?");
        assert_eq!(turn.role, Role::User);
        assert!(turn.sources.is_empty());
    }

    #[test]
    fn model_turn_keeps_source_order() {
        let sources = vec![
            Source {
                uri: "https://a.example".into(),
                title: "A".into(),
            },
            Source {
                uri: "https://b.example".into(),
                title: "B".into(),
            },
        ];
        let turn = ConversationTurn::model("respuesta", sources.clone());
        assert_eq!(turn.sources, sources);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Role::Model).unwrap(), "\"model\"");
    }
}
