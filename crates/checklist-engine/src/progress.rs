//! Progress derivation over checklist state.

use serde::Serialize;
use shared_types::{ChecklistCategory, ComplianceStatus};

/// Per-status counts plus the two headline percentages shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub total: usize,
    pub compliant: usize,
    pub non_compliant: usize,
    pub needs_consultation: usize,
    pub not_applicable: usize,
    /// Share of items reviewed (any non-pending status), 0-100 rounded.
    pub reviewed_percent: u32,
    /// Share of items compliant or not applicable, 0-100 rounded.
    pub success_percent: u32,
}

pub fn summarize(categories: &[ChecklistCategory]) -> ProgressSummary {
    let mut summary = ProgressSummary {
        total: 0,
        compliant: 0,
        non_compliant: 0,
        needs_consultation: 0,
        not_applicable: 0,
        reviewed_percent: 0,
        success_percent: 0,
    };

    for item in categories.iter().flat_map(|c| &c.items) {
        summary.total += 1;
        match item.status {
            ComplianceStatus::Pending => {}
            ComplianceStatus::Compliant => summary.compliant += 1,
            ComplianceStatus::NonCompliant => summary.non_compliant += 1,
            ComplianceStatus::NeedsConsultation => summary.needs_consultation += 1,
            ComplianceStatus::NotApplicable => summary.not_applicable += 1,
        }
    }

    if summary.total > 0 {
        let reviewed = summary.compliant
            + summary.non_compliant
            + summary.needs_consultation
            + summary.not_applicable;
        summary.reviewed_percent = percent(reviewed, summary.total);
        summary.success_percent = percent(summary.compliant + summary.not_applicable, summary.total);
    }

    summary
}

fn percent(part: usize, total: usize) -> u32 {
    ((part as f64 / total as f64) * 100.0).round() as u32
}
