//! Page scanning
//!
//! [`QuestionScanner`] ties a [`VisionCapability`] to the
//! [`ResponseExtractor`]: one model call per image, then extraction.

use serde::{Deserialize, Serialize};

use crate::error::ScanError;
use crate::extract::{ExtractionStrategy, ResponseExtractor};
use crate::image::ImageInput;
use crate::prompt::DEFAULT_INSTRUCTION;
use crate::traits::VisionCapability;
use crate::types::ScanResult;

/// Scanner settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerOptions {
    /// Replaces [`DEFAULT_INSTRUCTION`] when set
    pub instruction: Option<String>,
    /// How the JSON payload is located in the model's reply
    pub strategy: ExtractionStrategy,
}

/// Detects questions on page images with a vision model.
#[derive(Debug, Clone)]
pub struct QuestionScanner<M> {
    model: M,
    options: ScannerOptions,
}

impl<M: VisionCapability> QuestionScanner<M> {
    pub fn new(model: M) -> Self {
        Self::with_options(model, ScannerOptions::default())
    }

    pub fn with_options(model: M, options: ScannerOptions) -> Self {
        Self { model, options }
    }

    /// Override the instruction sent with each image
    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.options.instruction = Some(instruction.into());
        self
    }

    pub fn with_strategy(mut self, strategy: ExtractionStrategy) -> Self {
        self.options.strategy = strategy;
        self
    }

    pub fn instruction(&self) -> &str {
        self.options
            .instruction
            .as_deref()
            .unwrap_or(DEFAULT_INSTRUCTION)
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Scan one page. Any failure, including a failed model call, yields
    /// `None`; the reason is logged at `warn`.
    pub async fn scan(&self, image: &ImageInput) -> Option<ScanResult> {
        match self.try_scan(image).await {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::warn!(
                    provider = self.model.provider_id(),
                    kind = %e.kind(),
                    error = %e,
                    "scan produced no result"
                );
                None
            }
        }
    }

    /// Scan one page, reporting why no result was produced.
    pub async fn try_scan(&self, image: &ImageInput) -> Result<ScanResult, ScanError> {
        let raw = self.model.generate(image, self.instruction()).await?;
        let result = ResponseExtractor::new(self.options.strategy).try_extract(&raw)?;
        tracing::debug!(
            provider = self.model.provider_id(),
            questions = result.len(),
            "scan complete"
        );
        Ok(result)
    }
}

/// One-shot scan with Gemini using default settings.
///
/// The API key is passed through to the service unchecked. Returns `None` on
/// any failure, including client construction.
#[cfg(feature = "google")]
pub async fn scan_page(api_key: &str, image: &ImageInput) -> Option<ScanResult> {
    let client = match crate::providers::gemini::GeminiClient::builder()
        .api_key(api_key)
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!(error = %e, "failed to build Gemini client");
            return None;
        }
    };
    QuestionScanner::new(client).scan(image).await
}
