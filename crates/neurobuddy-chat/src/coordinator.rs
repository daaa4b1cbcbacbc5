//! Turn coordinator: owns the conversation log and the single-flight
//! submission state machine.
//!
//! Turns are appended in strict call order: the user turn for request N
//! is appended before request N's result, and request N's result before
//! request N+1 begins. The `AwaitingResponse` guard enforces this.

use std::sync::atomic::{AtomicBool, Ordering};

use neurobuddy_ai::ChatSession;
use neurobuddy_common::correlation_id;
use tracing::{debug, warn};

use crate::conversation::ConversationTurn;
use crate::sources::collect_sources;

/// Coordinator state as seen by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    Idle,
    AwaitingResponse,
}

/// What happened to a `submit` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A model turn with the response text was appended.
    Answered,
    /// The request failed; the fixed apology turn was appended and the
    /// coordinator accepts new input again.
    Recovered,
    /// Nothing happened: no turn appended, session not invoked.
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    EmptyInput,
    Busy,
    NoSession,
}

/// Guard that clears the awaiting flag on drop, so the coordinator
/// returns to `Idle` even if the submission future is cancelled.
struct TurnGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> TurnGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        if flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return None;
        }
        Some(Self { flag })
    }
}

impl Drop for TurnGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Owns one conversation for the process lifetime. The log is mutated
/// only through `submit`; everything else is a read-only snapshot.
pub struct TurnCoordinator {
    session: Option<ChatSession>,
    turns: Vec<ConversationTurn>,
    apology: String,
    last_error: Option<String>,
    busy: AtomicBool,
}

impl TurnCoordinator {
    /// `session` may be `None` when the factory soft-failed; every
    /// submission is then ignored with `IgnoreReason::NoSession`.
    pub fn new(session: Option<ChatSession>, apology: impl Into<String>) -> Self {
        Self {
            session,
            turns: Vec::new(),
            apology: apology.into(),
            last_error: None,
            busy: AtomicBool::new(false),
        }
    }

    /// Submit one user input and wait for the model turn.
    ///
    /// Empty input, a missing session, or an in-flight request make this
    /// a no-op. Otherwise the trimmed input is appended optimistically,
    /// the session is invoked, and either the model turn or the apology
    /// turn is appended before the coordinator goes back to `Idle`.
    pub async fn submit(&mut self, input: &str) -> SubmitOutcome {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return SubmitOutcome::Ignored(IgnoreReason::EmptyInput);
        }
        let Some(session) = self.session.as_mut() else {
            return SubmitOutcome::Ignored(IgnoreReason::NoSession);
        };
        let Some(_guard) = TurnGuard::acquire(&self.busy) else {
            return SubmitOutcome::Ignored(IgnoreReason::Busy);
        };

        let correlation = correlation_id();
        self.last_error = None;
        self.turns.push(ConversationTurn::user(trimmed));
        debug!(%correlation, chars = trimmed.len(), "user turn submitted");

        match session.send(trimmed).await {
            Ok(reply) => {
                let sources = collect_sources(reply.citations);
                debug!(%correlation, sources = sources.len(), "model turn received");
                self.turns.push(ConversationTurn::model(reply.text, sources));
                SubmitOutcome::Answered
            }
            Err(err) => {
                warn!(%correlation, error = %err, "chat request failed");
                self.last_error = Some(err.to_string());
                self.turns
                    .push(ConversationTurn::model(self.apology.clone(), Vec::new()));
                SubmitOutcome::Recovered
            }
        }
    }

    /// Read-only snapshot of the conversation log.
    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn state(&self) -> ChatState {
        if self.busy.load(Ordering::Acquire) {
            ChatState::AwaitingResponse
        } else {
            ChatState::Idle
        }
    }

    /// Detail of the most recent failed request, cleared by the next
    /// accepted submission.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Cumulative token usage of the underlying session, if any.
    pub fn usage(&self) -> Option<&neurobuddy_ai::UsageTotals> {
        self.session.as_ref().map(|s| s.usage())
    }
}
