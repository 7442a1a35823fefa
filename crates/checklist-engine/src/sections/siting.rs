//! Architectural Plans & Pool Siting
//!
//! Pool placement relative to building lines and boundaries, coping and
//! decking height limits, heritage-area siting and excavation limits.

use super::item;
use shared_types::ChecklistCategory;

pub fn category() -> ChecklistCategory {
    ChecklistCategory {
        id: "arch".to_string(),
        title: "Architectural Plans & Pool Siting".to_string(),
        items: vec![
            item(
                "pool_building_line",
                "Pool Location (Building Line)",
                "Swimming pool must be located behind the building line of the dwelling house.",
            ),
            item(
                "pool_secondary_road",
                "Pool Setback (Secondary Road)",
                "Minimum setback for a pool from a secondary road is the setback of the dwelling house from the secondary road.",
            ),
            item(
                "pool_water_line",
                "Pool Water Line Setback",
                "Water line must have a setback of at least 1m from a side or rear boundary.",
            ),
            item(
                "coping_height",
                "Coping Dimensions",
                "Coping must not be >1.4m above ground level. If >600mm above ground, max width is 300mm.",
            ),
            item(
                "decking_height",
                "Decking Height",
                "Decking around a swimming pool must not be more than 600mm above ground level (existing).",
            ),
            item(
                "pool_heritage",
                "Heritage Area Pool Siting",
                "In heritage areas: Must be behind rear building line and no closer to side boundaries than the dwelling.",
            ),
            item(
                "excavation",
                "Excavation Limits",
                "Maximum 1m excavation within 1m of boundary for retaining walls, pools, etc.",
            ),
        ],
    }
}
