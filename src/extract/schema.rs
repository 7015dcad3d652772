//! JSON Schema for the question list and the process-wide compiled validator.

use lazy_static::lazy_static;
use serde_json::{Value, json};

use crate::error::ScanError;

/// Maximum number of validation messages kept in a `SchemaMismatch`.
const MAX_REPORTED_ERRORS: usize = 3;

lazy_static! {
    static ref QUESTION_VALIDATOR: Result<jsonschema::Validator, String> =
        jsonschema::validator_for(&question_list_schema())
            .map_err(|e| format!("Invalid JSON Schema: {e}"));
}

/// JSON Schema (draft 2020-12) describing accepted model output.
///
/// Each field may appear under its short wire name or its long-form alias,
/// but not both.
pub fn question_list_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "type": "object",
        "required": ["questions"],
        "properties": {
            "questions": {
                "type": "array",
                "items": { "$ref": "#/$defs/question" }
            }
        },
        "$defs": {
            "ordinal": { "type": "integer", "minimum": 1, "maximum": u32::MAX },
            "kind": { "enum": ["mcq", "nat"] },
            "box": {
                "type": "array",
                "minItems": 4,
                "maxItems": 4,
                "items": { "type": "number" }
            },
            "question": {
                "type": "object",
                "allOf": [
                    { "oneOf": [{ "required": ["que"] }, { "required": ["number"] }] },
                    { "oneOf": [{ "required": ["type"] }, { "required": ["kind"] }] },
                    { "oneOf": [{ "required": ["bbox"] }, { "required": ["boundingBox"] }] }
                ],
                "properties": {
                    "que": { "$ref": "#/$defs/ordinal" },
                    "number": { "$ref": "#/$defs/ordinal" },
                    "type": { "$ref": "#/$defs/kind" },
                    "kind": { "$ref": "#/$defs/kind" },
                    "bbox": { "$ref": "#/$defs/box" },
                    "boundingBox": { "$ref": "#/$defs/box" }
                }
            }
        }
    })
}

/// Validate a parsed payload against [`question_list_schema`].
pub fn validate_question_list(instance: &Value) -> Result<(), ScanError> {
    let validator = QUESTION_VALIDATOR
        .as_ref()
        .map_err(|e| ScanError::SchemaMismatch(e.clone()))?;

    if validator.is_valid(instance) {
        return Ok(());
    }

    let msgs: Vec<String> = validator
        .iter_errors(instance)
        .take(MAX_REPORTED_ERRORS)
        .map(|err| format!("{} at {}", err, err.instance_path))
        .collect();
    Err(ScanError::SchemaMismatch(msgs.join("; ")))
}
