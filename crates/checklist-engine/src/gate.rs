//! Critical gateway checks.
//!
//! Five items gate the "CDC approved" outcome: the Section 10.7
//! complying-development and bushfire statements, normal lot dimensions,
//! zoning and council flood information. The assessment passes iff every
//! one of them is compliant.

use serde::Serialize;
use shared_types::{ChecklistCategory, ChecklistItem, ComplianceStatus};

/// Identifiers of the critical gateway items, in report order.
pub const CRITICAL_CHECK_IDS: &[&str] = &[
    "sec_10_7_complying_dev",
    "sec_10_7_bushfire",
    "lot_size_normal",
    "zoning_check",
    "flood_info",
];

/// A critical item that blocks approval, with the evidence recorded
/// against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedCheck {
    pub id: String,
    pub text: String,
    pub reason: String,
}

/// True iff every critical gateway item is compliant.
pub fn passes_gateway(categories: &[ChecklistCategory]) -> bool {
    failed_gateway_checks(categories).is_empty()
}

/// Critical items that are not compliant, with their notes as the reason.
///
/// A critical id absent from the visible checklist counts as a failure:
/// an item that cannot be reviewed cannot pass.
pub fn failed_gateway_checks(categories: &[ChecklistCategory]) -> Vec<FailedCheck> {
    let mut failures = Vec::new();

    for id in CRITICAL_CHECK_IDS {
        match find_item(categories, id) {
            Some(item) if item.status == ComplianceStatus::Compliant => {}
            Some(item) => failures.push(FailedCheck {
                id: item.id.clone(),
                text: item.text.clone(),
                reason: if item.notes.is_empty() {
                    "Requirement not met".to_string()
                } else {
                    item.notes.clone()
                },
            }),
            None => failures.push(FailedCheck {
                id: (*id).to_string(),
                text: (*id).to_string(),
                reason: "Critical item missing from checklist".to_string(),
            }),
        }
    }

    failures
}

fn find_item<'a>(categories: &'a [ChecklistCategory], id: &str) -> Option<&'a ChecklistItem> {
    categories.iter().flat_map(|c| &c.items).find(|i| i.id == id)
}
