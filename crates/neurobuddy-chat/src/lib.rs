//! Conversation layer for NeuroBuddy.
//!
//! Owns the append-only conversation log, the single-flight turn
//! coordinator, citation filtering and deduplication, and the pure
//! renderers that turn conversation turns into displayable content.

pub mod conversation;
pub mod coordinator;
pub mod render;
pub mod sources;

pub use conversation::{ConversationTurn, Role, Source};
pub use coordinator::{ChatState, IgnoreReason, SubmitOutcome, TurnCoordinator};
pub use render::{render_transcript_html, render_turn_html, render_turn_text};
pub use sources::collect_sources;
