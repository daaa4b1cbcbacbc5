//! Async send path for ChatSession.

use tracing::debug;

use crate::{AiError, ChatReply, Message, Role};

use super::manager::ChatSession;
use super::types::BusyGuard;

impl ChatSession {
    /// Send one user message and return the model's reply.
    ///
    /// The user message and the reply text are committed to the session
    /// history only when the request succeeds; a failed turn is never
    /// replayed on the next request.
    pub async fn send(&mut self, text: impl Into<String>) -> Result<ChatReply, AiError> {
        let _guard = BusyGuard::acquire(&self.busy)?;

        self.history.push(Message {
            role: Role::User,
            content: text.into(),
        });

        let messages = self.build_messages();
        debug!(session = %self.id, messages = messages.len(), "sending chat request");

        match self.client.generate(&messages).await {
            Ok(reply) => {
                self.totals.record(&reply.usage);
                self.history.push(Message {
                    role: Role::Model,
                    content: reply.text.clone(),
                });
                Ok(reply)
            }
            Err(err) => {
                self.history.pop();
                Err(err)
            }
        }
    }
}
