//! Documentation & Planning Certificates
//!
//! Paperwork that must be on file before a CDC assessment can proceed:
//! the Section 10.7 planning certificate (complying-development and
//! bushfire statements plus general flags), title search, 88b instrument
//! and deposited plan.

use super::item;
use shared_types::ChecklistCategory;

pub fn category() -> ChecklistCategory {
    ChecklistCategory {
        id: "docs".to_string(),
        title: "Documentation & Planning Certificates".to_string(),
        items: vec![
            item(
                "sec_10_7_complying_dev",
                "Section 10.7 - Complying Development Permitted",
                "Must state: \"Complying Development... may be carried out\" under Housing Code/Low Rise Housing Diversity Code etc.",
            ),
            item(
                "sec_10_7_bushfire",
                "Section 10.7 - Bushfire Check",
                "Must state: \"None of the land is bushfire prone land\".",
            ),
            item(
                "section_10_7",
                "Section 10.7 - General Flags",
                "Check for other flags: Acid Sulfate Soils, Heritage, Biodiversity, etc.",
            ),
            item(
                "title_search",
                "Title Search",
                "Check for ownership and encumbrances.",
            ),
            item(
                "88b",
                "88b Restrictions",
                "Check instrument for covenants or easements.",
            ),
            item(
                "dp_plan",
                "Deposited Plan (DP)",
                "Verify dimensions and boundaries.",
            ),
        ],
    }
}
