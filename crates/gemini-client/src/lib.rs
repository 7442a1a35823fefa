//! Thin client for the Google Gemini `generateContent` REST API.
//!
//! Two call shapes: a one-shot document analysis that uploads project
//! documents inline (base64) with a prompt embedding the checklist
//! structure and a declared JSON response schema, and a stateful chat
//! session running under the certifier system instruction. Everything else
//! in the workspace stays network-free.

pub mod chat;
pub mod client;
pub mod error;
pub mod prompt;
pub mod schema;

pub use chat::ChatSession;
pub use client::GeminiClient;
pub use error::GeminiError;
