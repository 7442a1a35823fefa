//! Error types for the Gemini integration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("No valid files to analyze. Please upload valid PDFs or Images.")]
    NoValidFiles,

    #[error("Request to Gemini failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Gemini response contained no candidate text")]
    EmptyResponse,

    #[error("Failed to parse Gemini response: {0}")]
    Parse(#[from] serde_json::Error),
}
