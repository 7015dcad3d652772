//! Instruction text and response schema sent with each page image.

use serde_json::{Value, json};

/// Default instruction asking the model for the question list.
pub const DEFAULT_INSTRUCTION: &str = r#"You are looking at one page of an exam paper.
Detect every question printed on the page and return ONLY a JSON object of this exact shape:

{
  "questions": [
    { "que": <integer>, "type": "mcq" | "nat", "bbox": [ymin, xmin, ymax, xmax] }
  ]
}

Rules:
- "que" is the question number as printed on the page.
- "type" is "mcq" for multiple-choice questions (printed answer options) and "nat" for numerical answer questions.
- "bbox" covers the whole question including its options, as integer pixel coordinates of the image, ordered ymin, xmin, ymax, xmax.
- If the page has no questions, return {"questions": []}.
- Do not add commentary or markdown."#;

/// Response schema in the OpenAPI subset Gemini accepts for
/// `generationConfig.responseSchema`.
pub fn gemini_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "questions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "que": { "type": "INTEGER" },
                        "type": { "type": "STRING", "enum": ["mcq", "nat"] },
                        "bbox": {
                            "type": "ARRAY",
                            "items": { "type": "INTEGER" },
                            "minItems": 4,
                            "maxItems": 4
                        }
                    },
                    "required": ["que", "type", "bbox"],
                    "propertyOrdering": ["que", "type", "bbox"]
                }
            }
        },
        "required": ["questions"]
    })
}
