//! ChatSession struct and history management.

use std::sync::atomic::AtomicBool;

use neurobuddy_common::SessionId;

use crate::usage::UsageTotals;
use crate::{ChatClient, Message, Role};

/// A stateful chat session bound to one client, one system instruction,
/// and one conversation history.
pub struct ChatSession {
    pub(super) id: SessionId,
    pub(super) client: Box<dyn ChatClient>,
    pub(super) system_instruction: Option<String>,
    /// Wire-level message history, replayed on every request.
    pub(super) history: Vec<Message>,
    pub(super) totals: UsageTotals,
    /// Whether the session is currently processing a request.
    pub(super) busy: AtomicBool,
}

impl ChatSession {
    pub fn new(client: Box<dyn ChatClient>) -> Self {
        Self {
            id: SessionId::new(),
            client,
            system_instruction: None,
            history: Vec::new(),
            totals: UsageTotals::new(),
            busy: AtomicBool::new(false),
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub(super) fn build_messages(&self) -> Vec<Message> {
        let mut msgs = Vec::new();
        if let Some(ref instruction) = self.system_instruction {
            msgs.push(Message {
                role: Role::System,
                content: instruction.clone(),
            });
        }
        msgs.extend(self.history.clone());
        msgs
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn system_instruction(&self) -> Option<&str> {
        self.system_instruction.as_deref()
    }

    /// The wire-level message history.
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn message_count(&self) -> usize {
        self.history.len()
    }

    /// Cumulative token usage across this session's calls.
    pub fn usage(&self) -> &UsageTotals {
        &self.totals
    }
}
