use std::time::Duration;

use crate::error::LlmError;

use super::client::GeminiClient;
use super::types::{GeminiConfig, GenerationConfig};

/// Gemini-specific builder for configuring Gemini clients.
///
/// # Example
/// ```rust,no_run
/// use paperscan::providers::gemini::GeminiClient;
///
/// # fn main() -> Result<(), paperscan::error::LlmError> {
/// let client = GeminiClient::builder()
///     .api_key("your-api-key")
///     .model("gemini-2.0-flash")
///     .structured_output(true)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default)]
pub struct GeminiBuilder {
    /// Gemini API key
    api_key: Option<String>,
    /// Base URL for Gemini API
    base_url: Option<String>,
    model: Option<String>,
    timeout: Option<Duration>,
    temperature: Option<f64>,
    max_output_tokens: Option<i32>,
    structured_output: bool,
    headers: Vec<(String, String)>,
    http_client: Option<reqwest::Client>,
}

impl GeminiBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key
    pub fn api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the model
    pub fn model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the whole-request HTTP timeout. Must be non-zero.
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set temperature (0.0 to 2.0)
    pub const fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set maximum output tokens
    pub const fn max_output_tokens(mut self, max_tokens: i32) -> Self {
        self.max_output_tokens = Some(max_tokens);
        self
    }

    /// Ask Gemini to emit JSON constrained by the question schema
    pub const fn structured_output(mut self, enabled: bool) -> Self {
        self.structured_output = enabled;
        self
    }

    /// Add a header sent with every request
    pub fn header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Use a preconfigured reqwest client. The `timeout` setting is ignored
    /// in that case.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the configuration without creating a client
    pub fn build_config(self) -> Result<(GeminiConfig, Option<reqwest::Client>), LlmError> {
        // Priority: parameter > environment variable
        let api_key = self
            .api_key
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .ok_or_else(|| {
                LlmError::ConfigurationError("API key is required for Gemini".to_string())
            })?;

        let mut config = GeminiConfig::new(api_key).with_structured_output(self.structured_output);
        if let Some(base_url) = self.base_url {
            config = config.with_base_url(base_url);
        }
        if let Some(model) = self.model {
            config = config.with_model(model);
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        for (name, value) in self.headers {
            config = config.with_header(name, value);
        }

        if self.temperature.is_some() || self.max_output_tokens.is_some() {
            let mut gc = GenerationConfig::new();
            gc.temperature = self.temperature;
            gc.max_output_tokens = self.max_output_tokens;
            config = config.with_generation_config(gc);
        }

        Ok((config, self.http_client))
    }

    /// Build the Gemini client
    pub fn build(self) -> Result<GeminiClient, LlmError> {
        let (config, http_client) = self.build_config()?;
        match http_client {
            Some(http) => Ok(GeminiClient::with_http_client(config, http)),
            None => GeminiClient::new(config),
        }
    }
}
