//! Stateful chat session with the compliance assistant.
//!
//! History lives here; the HTTP client is passed in per call so one client
//! can serve many sessions.

use serde_json::{json, Value};
use shared_types::ChatMessage;

use crate::client::{extract_text, GeminiClient};
use crate::error::GeminiError;
use crate::prompt::SYSTEM_INSTRUCTION;
use crate::schema::chat_generation_config;

#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    history: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Send one user message and return the model's reply.
    ///
    /// The user turn is recorded before the call, so a failed request still
    /// shows in the transcript; the model turn is recorded only on success.
    pub async fn send(
        &mut self,
        client: &GeminiClient,
        message: impl Into<String>,
    ) -> Result<String, GeminiError> {
        self.history.push(ChatMessage::user(message));

        let body = json!({
            "systemInstruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] },
            "contents": contents_from(&self.history),
            "generationConfig": chat_generation_config(),
        });

        let response = client.generate(body).await?;
        let reply = extract_text(&response)
            .ok_or(GeminiError::EmptyResponse)?
            .to_string();

        self.history.push(ChatMessage::model(reply.clone()));
        Ok(reply)
    }
}

/// Map the transcript into the Gemini `contents` array.
fn contents_from(history: &[ChatMessage]) -> Vec<Value> {
    history
        .iter()
        .map(|msg| {
            json!({
                "role": msg.role.as_wire_str(),
                "parts": [{ "text": msg.text }],
            })
        })
        .collect()
}
