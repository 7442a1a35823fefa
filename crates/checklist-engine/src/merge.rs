//! Checklist mutation: user edits and AI-result merging.
//!
//! Analysis results join onto the checklist by item id. Results carrying an
//! unknown id are ignored, and items without a matching result are left
//! untouched.

use shared_types::{AnalysisResult, ChecklistCategory, ComplianceStatus};

/// Merge analysis results onto the checklist. Returns how many items were
/// updated.
pub fn apply_analysis(
    categories: &mut [ChecklistCategory],
    results: &[AnalysisResult],
) -> usize {
    let mut applied = 0;

    for item in categories.iter_mut().flat_map(|c| &mut c.items) {
        if let Some(result) = results.iter().find(|r| r.id == item.id) {
            item.status = result.status;
            item.notes = result.notes.clone();
            applied += 1;
        }
    }

    applied
}

/// Set the status of one item. Returns false when the id is unknown.
pub fn update_status(
    categories: &mut [ChecklistCategory],
    id: &str,
    status: ComplianceStatus,
) -> bool {
    match find_item_mut(categories, id) {
        Some(item) => {
            item.status = status;
            true
        }
        None => false,
    }
}

/// Set the notes of one item. Returns false when the id is unknown.
pub fn update_notes(categories: &mut [ChecklistCategory], id: &str, notes: &str) -> bool {
    match find_item_mut(categories, id) {
        Some(item) => {
            item.notes = notes.to_string();
            true
        }
        None => false,
    }
}

fn find_item_mut<'a>(
    categories: &'a mut [ChecklistCategory],
    id: &str,
) -> Option<&'a mut shared_types::ChecklistItem> {
    categories
        .iter_mut()
        .flat_map(|c| &mut c.items)
        .find(|i| i.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::full_checklist;
    use pretty_assertions::assert_eq;

    fn result(id: &str, status: ComplianceStatus, notes: &str) -> AnalysisResult {
        AnalysisResult {
            id: id.to_string(),
            status,
            notes: notes.to_string(),
        }
    }

    #[test]
    fn test_matching_results_overwrite_status_and_notes() {
        let mut categories = full_checklist();
        let applied = apply_analysis(
            &mut categories,
            &[result(
                "title_search",
                ComplianceStatus::Compliant,
                "- Owner matches application\n- No encumbrances found",
            )],
        );

        assert_eq!(applied, 1);
        let item = categories
            .iter()
            .flat_map(|c| &c.items)
            .find(|i| i.id == "title_search")
            .unwrap();
        assert_eq!(item.status, ComplianceStatus::Compliant);
        assert!(item.notes.contains("No encumbrances"));
    }

    #[test]
    fn test_unmatched_items_are_left_unchanged() {
        let mut categories = full_checklist();
        apply_analysis(
            &mut categories,
            &[result("dp_plan", ComplianceStatus::Compliant, "Plan A01")],
        );

        for item in categories.iter().flat_map(|c| &c.items) {
            if item.id != "dp_plan" {
                assert_eq!(item.status, ComplianceStatus::Pending, "item {}", item.id);
                assert!(item.notes.is_empty(), "item {}", item.id);
            }
        }
    }

    #[test]
    fn test_unknown_result_ids_are_ignored() {
        let mut categories = full_checklist();
        let applied = apply_analysis(
            &mut categories,
            &[result("not_a_real_item", ComplianceStatus::Compliant, "")],
        );
        assert_eq!(applied, 0);
    }

    #[test]
    fn test_reapplying_results_overwrites_previous_merge() {
        let mut categories = full_checklist();
        apply_analysis(
            &mut categories,
            &[result("strata", ComplianceStatus::NeedsConsultation, "unclear")],
        );
        apply_analysis(
            &mut categories,
            &[result("strata", ComplianceStatus::Compliant, "Torrens title")],
        );

        let item = categories
            .iter()
            .flat_map(|c| &c.items)
            .find(|i| i.id == "strata")
            .unwrap();
        assert_eq!(item.status, ComplianceStatus::Compliant);
        assert_eq!(item.notes, "Torrens title");
    }

    #[test]
    fn test_update_status_unknown_id_returns_false() {
        let mut categories = full_checklist();
        assert!(!update_status(&mut categories, "nope", ComplianceStatus::Compliant));
        assert!(update_status(&mut categories, "88b", ComplianceStatus::NotApplicable));
    }

    #[test]
    fn test_update_notes_preserves_status() {
        let mut categories = full_checklist();
        update_status(&mut categories, "easement", ComplianceStatus::NonCompliant);
        update_notes(&mut categories, "easement", "Pool overlaps drainage easement");

        let item = categories
            .iter()
            .flat_map(|c| &c.items)
            .find(|i| i.id == "easement")
            .unwrap();
        assert_eq!(item.status, ComplianceStatus::NonCompliant);
        assert_eq!(item.notes, "Pool overlaps drainage easement");
    }
}
