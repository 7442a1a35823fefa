//! Prompt construction for the certifier assistant and document analysis.

use serde::Serialize;
use shared_types::ChecklistCategory;

/// System instruction for the chat assistant. The regulatory rule summary
/// must stay in sync with the checklist content in `checklist-engine`.
pub const SYSTEM_INSTRUCTION: &str = r#"You are an expert NSW Building Certifier and Town Planner specializing in Complying Development Certificates (CDC).
You are assisting a user with a "Preliminary CDC Check".
Your goal is to explain regulations clearly, analyze specific scenarios provided by the user, and help them determine if their project meets the criteria.

The specific rules you are enforcing are:
1. Architectural:
- Pools must be behind the building line.
- Pool setback from secondary road >= Dwelling setback.
- Pool water line >= 1m from side/rear boundary.
- Coping max 1.4m above ground. If >600mm high, max width 300mm.
- Pool decking max 600mm above ground.
- Excavation max 1m within 1m of boundary.
- Heritage: Pools behind rear building line, no closer to sides than dwelling.
2. Landscaping:
- Maintain Private Open Space (POS) (24sqm & 3m wide if lot >10m wide).
- No works in easements.
- 3m distance from protected trees unless permit obtained.
3. Zoning & Lot:
- Normal Min: 6m wide & 200sqm.
- Rural Min: 4000sqm.
- Battle-axe: 12x12m, access 3m wide.
- Permitted Zones: R1-R4, RU5 (Normal); RU1-RU4, RU6, R5 (Rural).
- No external CDC for Strata.
4. Flooding:
- Must comply with min floor levels.
- Cannot be in floodway, high hazard, flow path, or flood storage.
- Must not increase flooding elsewhere.

5. Section 10.7 - General Flags (Acid Sulfate Soils):
- If the property is identified as potentially containing Acid Sulfate Soils:
  - Class 3 or Class 4: MARK AS COMPLIANT (PASS), but add a note: "Restriction: Cannot dig deeper than 1m".
  - Class 5: MARK AS COMPLIANT (PASS).
  - Class 1 or Class 2: MARK AS NON_COMPLIANT (FAIL).
  - If NO Class is specified: MARK AS NEEDS_CONSULTATION (CHECK) and note "Pass subject to manual check".
- If NOT identified as containing Acid Sulfate Soils: MARK AS COMPLIANT.

Answer questions based strictly on these rules. If a user asks something outside this scope, answer generally but advise consulting a professional surveyor or certifier. Be concise and professional."#;

/// Simplified checklist view embedded in the analysis prompt so the model
/// sees ids alongside requirements.
#[derive(Debug, Serialize)]
struct PromptCategory<'a> {
    category: &'a str,
    items: Vec<PromptItem<'a>>,
}

#[derive(Debug, Serialize)]
struct PromptItem<'a> {
    id: &'a str,
    requirement: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a str>,
}

/// Build the document-analysis prompt embedding the visible checklist as
/// pretty-printed JSON.
pub fn analysis_prompt(categories: &[ChecklistCategory]) -> Result<String, serde_json::Error> {
    let structure: Vec<PromptCategory<'_>> = categories
        .iter()
        .map(|cat| PromptCategory {
            category: &cat.title,
            items: cat
                .items
                .iter()
                .map(|item| PromptItem {
                    id: &item.id,
                    requirement: &item.text,
                    details: item.subtext.as_deref(),
                })
                .collect(),
        })
        .collect();
    let structure_json = serde_json::to_string_pretty(&structure)?;

    Ok(format!(
        r#"You are an expert NSW CDC Certifier.
I have uploaded architectural plans, Section 10.7 certificates, Title Searches or other project documents.

Your task is twofold:
1. Extract Project Metadata: Find the Owner's Name, Property Address, and Lot/DP details (usually on the Title Search or Section 10.7).
2. Review Compliance: Cross-reference the documents against the following Checklist Structure.

CRITICAL RULES FOR SECTION 10.7 CERTIFICATES:
1. For item 'sec_10_7_complying_dev': Look specifically for the phrase "may be carried out" in relation to Complying Development under codes like Housing Code, Low Rise Housing Diversity Code, etc.
   - If the document says it "may be carried out", mark as COMPLIANT.
   - If it says "may not be carried out", mark as NON_COMPLIANT.

2. For item 'sec_10_7_bushfire': Look specifically for the phrase "None of the land is bushfire prone land" or "NO" next to Bushfire Prone Land.
   - If the land is NOT bushfire prone, mark as COMPLIANT.
   - If the land IS bushfire prone, mark as NEEDS_CONSULTATION (or NON_COMPLIANT if strict).

3. For item 'section_10_7' (General Flags) - Acid Sulfate Soils:
   - Look for "Acid Sulfate Soils" or similar text.
   - If Class 3 or Class 4: Mark as COMPLIANT, but MUST add note: "Restriction: Cannot dig deeper than 1m".
   - If Class 5: Mark as COMPLIANT.
   - If Class 1 or Class 2: Mark as NON_COMPLIANT.
   - If identified as containing Acid Sulfate Soils but NO Class is specified: Mark as NEEDS_CONSULTATION and note "Pass subject to manual check".
   - If NOT identified as containing Acid Sulfate Soils: Mark as COMPLIANT (unless other flags exist).

4. For item '88b' (88b Restrictions):
   - If the 88b instrument lists restrictions (e.g. "Restrictions on the Use of Land"), you MUST extract the text/description of each relevant restriction.
   - Do NOT just list the item numbers (e.g. "Items 12, 14").
   - Format as: "Item [Number]: [Brief Description of Restriction]".
   - Example: "Item 12: No fence to be erected within the easement area."
   - If there are many, summarize the key ones relevant to development (easements, building zones, etc.).

For each item in the checklist:
1. Search the documents for evidence (e.g., setbacks shown on plans, zoning on certificate).
2. Determine the status: COMPLIANT, NON_COMPLIANT, NEEDS_CONSULTATION (if ambiguous or missing info), or NOT_APPLICABLE.
3. Provide a clear "note" citing the specific evidence found.

Formatting Rules for "notes":
- If multiple pieces of evidence exist or you need to explain reasoning, use a multi-line format with bullet points (e.g., "- Evidence A\n- Evidence B").
- Keep the lines concise so they are easy to read.
- Reference specific page numbers or drawing numbers where possible (e.g. "Plan A01").

Checklist Structure to Fill:
{structure_json}

Return the data as a JSON Object containing "metadata" and "results"."#
    ))
}
