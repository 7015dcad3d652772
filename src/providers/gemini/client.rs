//! Gemini Client Implementation
//!
//! Sends one page image plus an instruction to `models/{model}:generateContent`
//! and returns the model's answer text.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use secrecy::ExposeSecret;

use crate::error::LlmError;
use crate::image::ImageInput;
use crate::traits::VisionCapability;
use crate::utils::http_headers::gemini_headers;
use crate::utils::join_url;

use super::builder::GeminiBuilder;
use super::convert;
use super::types::{GeminiConfig, GeminiErrorResponse, GenerateContentRequest, GenerateContentResponse};

const PROVIDER_ID: &str = "gemini";

/// Maximum number of body characters kept in error messages
const BODY_SAMPLE_CHARS: usize = 200;

/// Gemini client implementing [`VisionCapability`]
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http_client: HttpClient,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new Gemini client with the given configuration
    pub fn new(config: GeminiConfig) -> Result<Self, LlmError> {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = config.timeout {
            if timeout.is_zero() {
                return Err(LlmError::ConfigurationError(
                    "HTTP timeout must be greater than zero".to_string(),
                ));
            }
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(|e| {
            LlmError::ConfigurationError(format!("Failed to create HTTP client: {e}"))
        })?;
        Ok(Self::with_http_client(config, http_client))
    }

    /// Create a new Gemini client with a custom HTTP client
    pub fn with_http_client(config: GeminiConfig, http_client: HttpClient) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Start a [`GeminiBuilder`]
    pub fn builder() -> GeminiBuilder {
        GeminiBuilder::new()
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        join_url(
            &self.config.base_url,
            &format!("models/{}:generateContent", self.config.model),
        )
    }

    /// Send a raw `generateContent` request.
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LlmError> {
        let url = self.endpoint();
        let headers = gemini_headers(self.config.api_key.expose_secret(), &self.config.headers)?;

        tracing::debug!(provider = PROVIDER_ID, model = %self.config.model, url = %url, "sending generateContent request");

        let resp = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            let error = classify_http_error(status.as_u16(), &text);
            tracing::warn!(
                provider = PROVIDER_ID,
                model = %self.config.model,
                status = status.as_u16(),
                error = %error,
                "generateContent request failed"
            );
            return Err(error);
        }

        let response: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| LlmError::ParseError(format!("Failed to parse response JSON: {e}")))?;

        if let Some(usage) = &response.usage_metadata {
            tracing::debug!(
                provider = PROVIDER_ID,
                prompt_tokens = usage.prompt_token_count,
                candidate_tokens = usage.candidates_token_count,
                total_tokens = usage.total_token_count,
                "generateContent usage"
            );
        }
        Ok(response)
    }
}

#[async_trait]
impl VisionCapability for GeminiClient {
    async fn generate(&self, image: &ImageInput, instruction: &str) -> Result<String, LlmError> {
        let request = convert::build_request_body(&self.config, image, instruction);
        let response = self.generate_content(&request).await?;
        convert::response_text(&response)
    }

    fn provider_id(&self) -> &str {
        PROVIDER_ID
    }
}

/// Map a non-success response to an [`LlmError`].
///
/// Uses `error.message` from Gemini's error envelope when the body has one,
/// otherwise a truncated sample of the raw body.
pub fn classify_http_error(status: u16, body_text: &str) -> LlmError {
    let parsed = serde_json::from_str::<GeminiErrorResponse>(body_text).ok();
    let message = match &parsed {
        Some(p) if !p.error.message.is_empty() => p.error.message.clone(),
        _ => body_text.chars().take(BODY_SAMPLE_CHARS).collect(),
    };

    match status {
        401 | 403 => LlmError::AuthenticationError(format!("http={status} {message}")),
        404 => LlmError::NotFound(message),
        429 => LlmError::RateLimitError(message),
        _ => LlmError::ApiError {
            code: status,
            message,
            details: serde_json::from_str(body_text).ok(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_uses_gemini_error_message() {
        let body = r#"{"error":{"code":400,"message":"Unable to process input image.","status":"INVALID_ARGUMENT"}}"#;
        match classify_http_error(400, body) {
            LlmError::ApiError {
                code,
                message,
                details,
            } => {
                assert_eq!(code, 400);
                assert_eq!(message, "Unable to process input image.");
                assert!(details.is_some());
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn classify_maps_auth_rate_limit_and_not_found() {
        assert!(matches!(
            classify_http_error(403, "{}"),
            LlmError::AuthenticationError(_)
        ));
        assert!(matches!(
            classify_http_error(429, "quota"),
            LlmError::RateLimitError(ref m) if m == "quota"
        ));
        assert!(matches!(
            classify_http_error(404, "models/x is not found"),
            LlmError::NotFound(_)
        ));
    }

    #[test]
    fn classify_truncates_plain_bodies() {
        let body = "x".repeat(1000);
        match classify_http_error(502, &body) {
            LlmError::ApiError {
                message, details, ..
            } => {
                assert_eq!(message.len(), BODY_SAMPLE_CHARS);
                assert!(details.is_none());
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn endpoint_includes_model() {
        let client = GeminiClient::new(
            GeminiConfig::new("k")
                .with_base_url("http://localhost:1234/v1beta/")
                .with_model("gemini-test"),
        )
        .unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:1234/v1beta/models/gemini-test:generateContent"
        );
        assert_eq!(client.provider_id(), "gemini");
    }
}
