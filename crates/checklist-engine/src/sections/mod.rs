//! The NSW CDC pool/spa regulatory rule set.
//!
//! Each module authors one checklist category. Item identifiers are stable
//! keys: the AI integration joins its results back onto the checklist by
//! these ids, so renaming one is a breaking change.

pub mod documentation;
pub mod flooding;
pub mod landscaping;
pub mod siting;
pub mod zoning;

use shared_types::{ChecklistCategory, ChecklistItem, ComplianceStatus, ProjectType};

/// Items that do not apply to above-ground spa assessments (no excavation,
/// no coping or decking, no landscaped-area impact).
pub const SPA_EXCLUDED_IDS: &[&str] = &[
    "coping_height",
    "decking_height",
    "excavation",
    "landscaped_area",
];

/// The full pool checklist, all items pending, in assessment order.
pub fn full_checklist() -> Vec<ChecklistCategory> {
    vec![
        documentation::category(),
        zoning::category(),
        flooding::category(),
        siting::category(),
        landscaping::category(),
    ]
}

/// Checklist tailored to the project type.
///
/// Spa assessments drop the excavation-related items; a category left with
/// no items is dropped entirely.
pub fn checklist_for(project: ProjectType) -> Vec<ChecklistCategory> {
    match project {
        ProjectType::Pool => full_checklist(),
        ProjectType::Spa => full_checklist()
            .into_iter()
            .map(|mut cat| {
                cat.items.retain(|item| !SPA_EXCLUDED_IDS.contains(&item.id.as_str()));
                cat
            })
            .filter(|cat| !cat.items.is_empty())
            .collect(),
    }
}

/// Constructor shared by the section modules: every item starts pending
/// with empty notes.
fn item(id: &str, text: &str, subtext: &str) -> ChecklistItem {
    ChecklistItem {
        id: id.to_string(),
        text: text.to_string(),
        subtext: Some(subtext.to_string()),
        status: ComplianceStatus::Pending,
        notes: String::new(),
    }
}
