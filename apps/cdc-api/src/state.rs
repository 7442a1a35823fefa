//! Application state for the CDC API.
//!
//! Assessments are held in memory only — the tool is a preliminary check
//! with an explicit JSON export, not a system of record.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use gemini_client::{ChatSession, GeminiClient};
use shared_types::{ChecklistCategory, ProjectMetadata, ProjectType};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ApiError;

pub struct AppState {
    pub assessments: RwLock<HashMap<String, Assessment>>,
    pub gemini: Option<GeminiClient>,
}

impl AppState {
    /// Build state from the environment: `GEMINI_API_KEY` enables the AI
    /// endpoints, `GEMINI_MODEL` overrides the default model.
    pub fn from_env() -> Self {
        let gemini = std::env::var("GEMINI_API_KEY").ok().map(|key| {
            let client = GeminiClient::new(key);
            match std::env::var("GEMINI_MODEL") {
                Ok(model) => client.with_model(model),
                Err(_) => client,
            }
        });
        Self::with_gemini(gemini)
    }

    pub fn with_gemini(gemini: Option<GeminiClient>) -> Self {
        Self {
            assessments: RwLock::new(HashMap::new()),
            gemini,
        }
    }
}

/// One in-progress compliance assessment.
pub struct Assessment {
    pub id: String,
    pub project_type: ProjectType,
    pub categories: Vec<ChecklistCategory>,
    pub metadata: Option<ProjectMetadata>,
    pub chat: ChatSession,
    /// One outstanding AI call (analysis or chat) at a time.
    ai_busy: bool,
    pub created_at: DateTime<Utc>,
}

impl Assessment {
    pub fn new(project_type: ProjectType) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            project_type,
            categories: checklist_engine::checklist_for(project_type),
            metadata: None,
            chat: ChatSession::new(),
            ai_busy: false,
            created_at: Utc::now(),
        }
    }

    /// Claim the single AI-call slot; rejected while a call is in flight.
    pub fn begin_ai_call(&mut self) -> Result<(), ApiError> {
        if self.ai_busy {
            return Err(ApiError::RequestInFlight);
        }
        self.ai_busy = true;
        Ok(())
    }

    pub fn finish_ai_call(&mut self) {
        self.ai_busy = false;
    }
}
