//! Flooding & Environmental
//!
//! Council flood information plus the three flood-engineer certifications:
//! minimum floor levels, exclusion from high-hazard zones, and no increased
//! flooding elsewhere.

use super::item;
use shared_types::ChecklistCategory;

pub fn category() -> ChecklistCategory {
    ChecklistCategory {
        id: "flood".to_string(),
        title: "Flooding & Environmental".to_string(),
        items: vec![
            item(
                "flood_info",
                "Council Flood Information",
                "Obtain flood information from council.",
            ),
            item(
                "floor_levels",
                "Flood Engineer Cert (Floor Levels)",
                "Confirm compliance with 3.5 specifying minimum floor levels.",
            ),
            item(
                "flood_zones",
                "Flood Engineer Cert (Zones)",
                "Certify NOT in: flood storage, floodway, flow path, high hazard, or high risk area.",
            ),
            item(
                "flood_impact",
                "Flood Engineer Cert (Impact)",
                "Confirm development does not result in increased flooding elsewhere.",
            ),
        ],
    }
}
