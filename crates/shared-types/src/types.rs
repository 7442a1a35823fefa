//! Domain types for the CDC compliance checklist.
//!
//! Item identifiers are stable keys into the regulatory rule set and the
//! join key for merging AI analysis results back onto the checklist.

use serde::{Deserialize, Serialize};

/// Review status of a single checklist item.
///
/// Wire format uses the SCREAMING_SNAKE_CASE strings that the AI response
/// schema enumerates (`PENDING`, `COMPLIANT`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplianceStatus {
    Pending,
    Compliant,
    NonCompliant,
    NotApplicable,
    NeedsConsultation,
}

impl ComplianceStatus {
    /// True once a certifier (or the AI) has reviewed the item.
    pub fn is_reviewed(self) -> bool {
        self != ComplianceStatus::Pending
    }
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplianceStatus::Pending => write!(f, "pending"),
            ComplianceStatus::Compliant => write!(f, "compliant"),
            ComplianceStatus::NonCompliant => write!(f, "non compliant"),
            ComplianceStatus::NotApplicable => write!(f, "not applicable"),
            ComplianceStatus::NeedsConsultation => write!(f, "needs consultation"),
        }
    }
}

/// A single regulatory requirement with its review state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,
    pub status: ComplianceStatus,
    pub notes: String,
}

/// Ordered group of checklist items under a title. Purely organizational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistCategory {
    pub id: String,
    pub title: String,
    pub items: Vec<ChecklistItem>,
}

/// Project details extracted from uploaded documents (Title Search,
/// Section 10.7 certificate). Populated only by the AI integration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMetadata {
    pub owner_name: String,
    pub address: String,
    pub lot_dp: String,
}

/// Kind of development being assessed.
///
/// Above-ground spas skip the excavation-related items of the full pool
/// checklist; the engine owns the exclusion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectType {
    Pool,
    Spa,
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectType::Pool => write!(f, "pool"),
            ProjectType::Spa => write!(f, "spa"),
        }
    }
}

/// One per-item verdict returned by the document analysis call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub id: String,
    pub status: ComplianceStatus,
    pub notes: String,
}

/// Declared structured output of the document analysis call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub metadata: ProjectMetadata,
    pub results: Vec<AnalysisResult>,
}

/// An uploaded document forwarded to the AI as inline data.
///
/// `data` is base64; browser clients send data-URLs, so a
/// `data:<mime>;base64,` prefix is tolerated and stripped before use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileUpload {
    pub name: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub data: String,
}

impl FileUpload {
    /// Bare base64 payload, or `None` when the upload is empty.
    pub fn payload(&self) -> Option<&str> {
        let data = match self.data.split_once(',') {
            Some((_, rest)) => rest,
            None => self.data.as_str(),
        };
        if data.is_empty() {
            None
        } else {
            Some(data)
        }
    }
}
