//! Response extraction
//!
//! Turns the free-form text a vision model returns into a [`ScanResult`].
//! The model is asked for bare JSON, but replies routinely wrap it in prose
//! or markdown fences, and sometimes return something that is not the
//! requested shape at all. Extraction runs four steps:
//!
//! 1. locate a JSON object substring ([`ExtractionStrategy`])
//! 2. parse it with `serde_json`
//! 3. validate it against [`schema::question_list_schema`]
//! 4. convert it into typed [`Question`](crate::types::Question) values
//!
//! Every step can fail; the reason is reported as a [`ScanError`] by
//! [`ResponseExtractor::try_extract`] and collapsed to `None` by
//! [`ResponseExtractor::extract`].
//!
//! ```rust
//! use paperscan::extract::extract;
//! use paperscan::types::QuestionKind;
//!
//! let raw = r#"Here is the result: {"questions":[{"que":1,"type":"mcq","bbox":[10,20,30,40]}]} Thanks!"#;
//! let result = extract(raw).unwrap();
//! assert_eq!(result.questions[0].kind, QuestionKind::MultipleChoice);
//! ```

pub mod schema;
pub mod slice;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ScanError;
use crate::types::ScanResult;

/// How the JSON payload is located inside the raw response text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStrategy {
    /// First `{` through last `}` with no balancing.
    #[default]
    Greedy,
    /// First fully balanced top-level `{ ... }`, string-literal aware.
    Balanced,
}

impl ExtractionStrategy {
    /// Locate the candidate payload in `text`.
    pub fn locate<'a>(&self, text: &'a str) -> Option<&'a str> {
        match self {
            Self::Balanced => slice::balanced_object_slice(text),
            Self::Greedy => slice::greedy_object_slice(text),
        }
    }
}

/// Stateless extractor for model responses.
///
/// Cheap to copy and safe to share between tasks; it holds no mutable state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseExtractor {
    strategy: ExtractionStrategy,
}

impl ResponseExtractor {
    pub const fn new(strategy: ExtractionStrategy) -> Self {
        Self { strategy }
    }

    pub const fn strategy(&self) -> ExtractionStrategy {
        self.strategy
    }

    /// Extract a result, or `None` on any failure.
    pub fn extract(&self, raw_text: &str) -> Option<ScanResult> {
        match self.try_extract(raw_text) {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::debug!(
                    kind = %e.kind(),
                    error = %e,
                    response_len = raw_text.len(),
                    "response extraction failed"
                );
                None
            }
        }
    }

    /// Extract a result, reporting why extraction failed.
    pub fn try_extract(&self, raw_text: &str) -> Result<ScanResult, ScanError> {
        let candidate = self.strategy.locate(raw_text).ok_or(ScanError::NoPayload)?;

        let value: Value = serde_json::from_str(candidate)
            .map_err(|e| ScanError::MalformedPayload(e.to_string()))?;

        schema::validate_question_list(&value)?;

        let result: ScanResult = serde_json::from_value(value)
            .map_err(|e| ScanError::SchemaMismatch(e.to_string()))?;

        tracing::debug!(
            questions = result.questions.len(),
            strategy = ?self.strategy,
            "extracted questions from response"
        );
        Ok(result)
    }
}

/// [`ResponseExtractor::extract`] with the default strategy.
pub fn extract(raw_text: &str) -> Option<ScanResult> {
    ResponseExtractor::default().extract(raw_text)
}

/// [`ResponseExtractor::try_extract`] with the default strategy.
pub fn try_extract(raw_text: &str) -> Result<ScanResult, ScanError> {
    ResponseExtractor::default().try_extract(raw_text)
}
