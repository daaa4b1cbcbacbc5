//! Google Gemini API client.
//!
//! Implements the `ChatClient` trait for Gemini models via the
//! Generative Language API, with the Google Search grounding tool.

mod api;
mod client;
mod config;

pub use client::GeminiClient;
pub use config::GeminiConfig;
