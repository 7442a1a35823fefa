//! Landscaping & Site
//!
//! Private open space, minimum landscaped area, easements and protected
//! trees.

use super::item;
use shared_types::ChecklistCategory;

pub fn category() -> ChecklistCategory {
    ChecklistCategory {
        id: "landscaping".to_string(),
        title: "Landscaping & Site".to_string(),
        items: vec![
            item(
                "pos",
                "Private Open Space (POS)",
                "Maintain POS compliance (e.g., 24m\u{b2} & 3m wide if lot >10m wide).",
            ),
            item(
                "landscaped_area",
                "Minimum Landscaped Area",
                "Maintain minimum landscaped area to comply with clause.",
            ),
            item(
                "easement",
                "Easements",
                "No works permitted in an easement.",
            ),
            item(
                "trees",
                "Protected Trees",
                "Requires council permit for removal OR development must maintain 3m from base of protected trees.",
            ),
        ],
    }
}
