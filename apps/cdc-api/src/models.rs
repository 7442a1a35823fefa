//! Request and response models for the CDC API.

use checklist_engine::{passes_gateway, summarize, ProgressSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::{
    ChatMessage, ChecklistCategory, ComplianceStatus, FileUpload, ProjectMetadata, ProjectType,
};

use crate::state::Assessment;

/// Request to start a new assessment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssessmentRequest {
    pub project_type: ProjectType,
}

/// Current assessment state with derived summaries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    pub id: String,
    pub project_type: ProjectType,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ProjectMetadata>,
    pub categories: Vec<ChecklistCategory>,
    pub progress: ProgressSummary,
    pub gateway_passed: bool,
}

impl AssessmentResponse {
    pub fn from_assessment(assessment: &Assessment) -> Self {
        Self {
            id: assessment.id.clone(),
            project_type: assessment.project_type,
            created_at: assessment.created_at,
            metadata: assessment.metadata.clone(),
            categories: assessment.categories.clone(),
            progress: summarize(&assessment.categories),
            gateway_passed: passes_gateway(&assessment.categories),
        }
    }
}

/// User edit of one checklist item. Absent fields are left unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(default)]
    pub status: Option<ComplianceStatus>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Documents to analyze.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub files: Vec<FileUpload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub history: Vec<ChatMessage>,
}

/// Client-side download of the current assessment state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    pub metadata: Option<ProjectMetadata>,
    pub categories: Vec<ChecklistCategory>,
}
