//! Printable assessment report assembly.

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared_types::{ChecklistCategory, ProjectMetadata, ProjectType};

use crate::gate::{failed_gateway_checks, FailedCheck};
use crate::progress::{summarize, ProgressSummary};

/// Snapshot of the assessment suitable for a printable report: overall
/// pass/fail, the blocking items, progress counts and the full checklist.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    pub generated_at: DateTime<Utc>,
    pub project_type: ProjectType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ProjectMetadata>,
    pub passed: bool,
    pub failed_checks: Vec<FailedCheck>,
    pub progress: ProgressSummary,
    pub categories: Vec<ChecklistCategory>,
}

pub fn build_report(
    project_type: ProjectType,
    metadata: Option<ProjectMetadata>,
    categories: &[ChecklistCategory],
) -> AssessmentReport {
    let failed_checks = failed_gateway_checks(categories);
    AssessmentReport {
        generated_at: Utc::now(),
        project_type,
        metadata,
        passed: failed_checks.is_empty(),
        failed_checks,
        progress: summarize(categories),
        categories: categories.to_vec(),
    }
}
