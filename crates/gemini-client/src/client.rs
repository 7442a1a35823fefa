//! HTTP client for the Gemini `generateContent` endpoint.

use serde_json::{json, Value};
use shared_types::{AnalysisResponse, ChecklistCategory, FileUpload};

use crate::error::GeminiError;
use crate::prompt;
use crate::schema;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.0-flash-lite";

#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{API_BASE}/{}:generateContent?key={}",
            self.model, self.api_key
        )
    }

    /// Analyze uploaded project documents against the visible checklist.
    ///
    /// Uploads with empty payloads are dropped; it is an error if none
    /// survive. The response is parsed against the declared schema into an
    /// [`AnalysisResponse`].
    pub async fn analyze_documents(
        &self,
        files: &[FileUpload],
        categories: &[ChecklistCategory],
    ) -> Result<AnalysisResponse, GeminiError> {
        let mut parts: Vec<Value> = Vec::new();
        for file in files {
            if let Some(payload) = file.payload() {
                tracing::debug!(name = %file.name, mime = %file.mime_type, "attaching document");
                parts.push(json!({
                    "inlineData": { "mimeType": file.mime_type, "data": payload }
                }));
            } else {
                tracing::warn!(name = %file.name, "skipping empty upload");
            }
        }
        if parts.is_empty() {
            return Err(GeminiError::NoValidFiles);
        }

        parts.push(json!({ "text": prompt::analysis_prompt(categories)? }));

        let body = json!({
            "contents": [{ "parts": parts }],
            "generationConfig": schema::analysis_generation_config(),
        });

        let response = self.generate(body).await?;
        let text = extract_text(&response).ok_or(GeminiError::EmptyResponse)?;
        Ok(serde_json::from_str(text)?)
    }

    /// Low-level call shared by analysis and chat.
    pub(crate) async fn generate(&self, body: Value) -> Result<Value, GeminiError> {
        let response = self.http.post(self.endpoint()).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), "Gemini request failed: {body}");
            return Err(GeminiError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<Value>().await?)
    }
}

/// First candidate's first text part, the only slot we ever read.
pub(crate) fn extract_text(response: &Value) -> Option<&str> {
    response["candidates"][0]["content"]["parts"][0]["text"].as_str()
}
