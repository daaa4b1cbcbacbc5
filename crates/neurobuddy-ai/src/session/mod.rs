//! Conversation session management.
//!
//! A `ChatSession` owns the wire-level message history and replays it on
//! every request, so callers never resend prior turns. Sessions are
//! created through the soft-failing factory in this module.

mod chat;
mod factory;
mod manager;
mod types;

pub use factory::{create_session, SessionOptions, API_KEY_ENV};
pub use manager::ChatSession;
