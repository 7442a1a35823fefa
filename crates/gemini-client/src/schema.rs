//! Declared response schema for the document analysis call.
//!
//! Gemini's structured output takes an OpenAPI-style schema; the shape here
//! must deserialize into `shared_types::AnalysisResponse`.

use serde_json::{json, Value};

/// Wire strings of `ComplianceStatus`, as enumerated in the schema.
pub const STATUS_ENUM: &[&str] = &[
    "PENDING",
    "COMPLIANT",
    "NON_COMPLIANT",
    "NOT_APPLICABLE",
    "NEEDS_CONSULTATION",
];

/// Response schema: `{ metadata: {ownerName, address, lotDp}, results: [{id, status, notes}] }`.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "metadata": {
                "type": "OBJECT",
                "properties": {
                    "ownerName": { "type": "STRING", "description": "Name of the property owner(s)" },
                    "address": { "type": "STRING", "description": "Full property address" },
                    "lotDp": { "type": "STRING", "description": "Lot and DP/SP number (e.g. Lot 1 DP 123456)" }
                },
                "required": ["ownerName", "address", "lotDp"]
            },
            "results": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "STRING" },
                        "status": { "type": "STRING", "enum": STATUS_ENUM },
                        "notes": { "type": "STRING" }
                    },
                    "required": ["id", "status", "notes"]
                }
            }
        },
        "required": ["metadata", "results"]
    })
}

/// Generation config forcing JSON output against the response schema.
pub fn analysis_generation_config() -> Value {
    json!({
        "responseMimeType": "application/json",
        "responseSchema": response_schema(),
    })
}

/// Generation config for the chat assistant.
pub fn chat_generation_config() -> Value {
    json!({ "temperature": 0.7 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ComplianceStatus;

    #[test]
    fn test_schema_enumerates_every_status() {
        for wire in STATUS_ENUM {
            let parsed: Result<ComplianceStatus, _> =
                serde_json::from_str(&format!("\"{wire}\""));
            assert!(parsed.is_ok(), "schema enum {wire} not a ComplianceStatus");
        }
    }

    #[test]
    fn test_schema_requires_metadata_and_results() {
        let schema = response_schema();
        assert_eq!(schema["required"], json!(["metadata", "results"]));
        assert_eq!(
            schema["properties"]["metadata"]["required"],
            json!(["ownerName", "address", "lotDp"])
        );
    }

    #[test]
    fn test_analysis_config_forces_json_output() {
        let config = analysis_generation_config();
        assert_eq!(config["responseMimeType"], "application/json");
        assert!(config["responseSchema"].is_object());
    }
}
