//! Structured-output contract for the research report
//!
//! The schema is sent to the provider as-is; the provider enforces it. Locally
//! the payload is only deserialized into [`ResearchReport`], whose closed
//! shape mirrors this schema field for field.
//!
//! [`ResearchReport`]: crate::research::types::ResearchReport

use serde_json::json;

use crate::workflow_utils::ResponseSchema;

pub const SCHEMA_NAME: &str = "business_research_report";

/// Required top-level fields of the report, in declaration order
pub const REPORT_FIELDS: [&str; 6] = [
    "niche",
    "audience_summary",
    "top_problems",
    "market_signals",
    "offer_ideas",
    "execution_notes",
];

pub const PROBLEM_FIELDS: [&str; 3] = ["problem", "why_it_matters", "current_solutions"];

pub const OFFER_FIELDS: [&str; 6] = [
    "offer_name",
    "offer_type",
    "deliverables",
    "who_it_helps",
    "difficulty",
    "time_to_build_days",
];

/// The closed, strict JSON schema for [`crate::research::ResearchReport`]
pub fn business_research_schema() -> ResponseSchema {
    ResponseSchema {
        name: SCHEMA_NAME.to_string(),
        strict: true,
        schema: json!({
            "type": "object",
            "additionalProperties": false,
            "properties": {
                "niche": {"type": "string"},
                "audience_summary": {"type": "string"},
                "top_problems": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "additionalProperties": false,
                        "properties": {
                            "problem": {"type": "string"},
                            "why_it_matters": {"type": "string"},
                            "current_solutions": {"type": "string"}
                        },
                        "required": PROBLEM_FIELDS
                    }
                },
                "market_signals": {
                    "type": "array",
                    "items": {"type": "string"}
                },
                "offer_ideas": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "additionalProperties": false,
                        "properties": {
                            "offer_name": {"type": "string"},
                            "offer_type": {"type": "string"},
                            "deliverables": {"type": "string"},
                            "who_it_helps": {"type": "string"},
                            "difficulty": {"type": "string"},
                            "time_to_build_days": {"type": "integer"}
                        },
                        "required": OFFER_FIELDS
                    }
                },
                "execution_notes": {"type": "string"}
            },
            "required": REPORT_FIELDS
        }),
    }
}
