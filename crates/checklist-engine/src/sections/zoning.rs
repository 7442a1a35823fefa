//! Lot Specifications & Zoning
//!
//! Minimum lot dimensions (normal, rural and battle-axe lots), permitted
//! zones, the strata prohibition and the vacant-lot dwelling-approval
//! prerequisite.

use super::item;
use shared_types::ChecklistCategory;

pub fn category() -> ChecklistCategory {
    ChecklistCategory {
        id: "zoning".to_string(),
        title: "Lot Specifications & Zoning".to_string(),
        items: vec![
            item(
                "lot_size_normal",
                "Normal Lot Dimensions",
                "Min 6m wide & 200m\u{b2}.",
            ),
            item("lot_size_rural", "Rural Lot Dimensions", "Min 4000m\u{b2}."),
            item(
                "battle_axe",
                "Battle Axe Lots",
                "Min 12m x 12m area. Access laneway min 3m wide.",
            ),
            item(
                "zoning_check",
                "Zoning Compliance",
                "Normal: R1, R2, R3, R4, RU5. Rural: RU1, RU2, RU3, RU4, RU6, R5.",
            ),
            item(
                "strata",
                "Strata Check",
                "External CDC not permitted for Strata lots (e.g., townhouses).",
            ),
            item(
                "vacant_lot",
                "Vacant Lot Pre-requisite",
                "Requires copy of dwelling approval (CDC or DA) if lot is vacant.",
            ),
        ],
    }
}
