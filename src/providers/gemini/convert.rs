//! Gemini request/response conversion helpers (pure functions)
//!
//! These build the typed request for one page image and pull the answer text
//! out of a typed response, without performing HTTP calls.

use crate::error::LlmError;
use crate::image::ImageInput;
use crate::prompt;

use super::types::{Blob, Content, GeminiConfig, GenerateContentRequest, GenerateContentResponse, Part};

/// Build the `generateContent` body: the image first, then the instruction.
pub fn build_request_body(
    config: &GeminiConfig,
    image: &ImageInput,
    instruction: &str,
) -> GenerateContentRequest {
    let parts = vec![
        Part::InlineData {
            inline_data: Blob {
                mime_type: image.mime_type().to_string(),
                data: image.to_base64(),
            },
        },
        Part::Text {
            text: instruction.to_string(),
            thought: None,
        },
    ];

    let mut generation_config = config.generation_config.clone();
    if config.structured_output {
        let mut gc = generation_config.unwrap_or_default();
        if gc.response_mime_type.is_none() {
            gc.response_mime_type = Some("application/json".to_string());
        }
        if gc.response_schema.is_none() {
            gc.response_schema = Some(prompt::gemini_response_schema());
        }
        generation_config = Some(gc);
    }

    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts,
        }],
        generation_config,
    }
}

/// Concatenate the text parts of the first candidate.
///
/// Thought summaries are skipped. A blocked prompt, a missing candidate or a
/// candidate without text is reported as `ParseError`.
pub fn response_text(response: &GenerateContentResponse) -> Result<String, LlmError> {
    let Some(candidate) = response.candidates.first() else {
        let reason = response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
            .unwrap_or("no candidates");
        return Err(LlmError::ParseError(format!(
            "Gemini returned an empty response: {reason}"
        )));
    };

    let text: String = candidate
        .content
        .iter()
        .flat_map(|c| c.parts.iter())
        .filter_map(|part| match part {
            Part::Text { text, thought } if *thought != Some(true) => Some(text.as_str()),
            _ => None,
        })
        .collect();

    if text.is_empty() {
        return Err(LlmError::ParseError(format!(
            "Gemini returned no text (finish_reason={})",
            candidate.finish_reason.as_deref().unwrap_or("unknown")
        )));
    }
    Ok(text)
}
