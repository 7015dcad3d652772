//! HTTP header construction for the Gemini API.

use crate::error::LlmError;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use std::collections::HashMap;

/// Header carrying the Gemini API key
pub const GOOG_API_KEY: &str = "x-goog-api-key";

/// HTTP header builder for API requests
pub struct HttpHeaderBuilder {
    headers: HeaderMap,
}

impl HttpHeaderBuilder {
    pub fn new() -> Self {
        Self {
            headers: HeaderMap::new(),
        }
    }

    /// Add JSON content type
    pub fn with_json_content_type(mut self) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self
    }

    /// Add a credential header; the value is marked sensitive so it is
    /// redacted from `Debug` output.
    pub fn with_secret_header(mut self, name: &str, value: &str) -> Result<Self, LlmError> {
        let header_name = parse_name(name)?;
        let mut header_value = HeaderValue::from_str(value).map_err(|e| {
            LlmError::ConfigurationError(format!("Invalid value for header '{name}': {e}"))
        })?;
        header_value.set_sensitive(true);
        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Add multiple custom headers from a HashMap
    pub fn with_custom_headers(
        mut self,
        custom_headers: &HashMap<String, String>,
    ) -> Result<Self, LlmError> {
        for (key, value) in custom_headers {
            let header_name = parse_name(key)?;
            self.headers.insert(
                header_name,
                HeaderValue::from_str(value).map_err(|e| {
                    LlmError::ConfigurationError(format!("Invalid header value '{value}': {e}"))
                })?,
            );
        }
        Ok(self)
    }

    pub fn build(self) -> HeaderMap {
        self.headers
    }
}

impl Default for HttpHeaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_name(name: &str) -> Result<HeaderName, LlmError> {
    HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| LlmError::ConfigurationError(format!("Invalid header name '{name}': {e}")))
}

/// Build headers for a Gemini request.
///
/// Custom headers are applied first. If they already carry an
/// `Authorization` header the API key is not added, otherwise a non-empty
/// key goes into `x-goog-api-key`.
pub fn gemini_headers(
    api_key: &str,
    custom_headers: &HashMap<String, String>,
) -> Result<HeaderMap, LlmError> {
    let mut builder = HttpHeaderBuilder::new()
        .with_json_content_type()
        .with_custom_headers(custom_headers)?;

    let has_authorization = custom_headers
        .keys()
        .any(|k| k.eq_ignore_ascii_case("authorization"));

    if !has_authorization && !api_key.is_empty() {
        builder = builder.with_secret_header(GOOG_API_KEY, api_key)?;
    }

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_goes_into_goog_header() {
        let headers = gemini_headers("k-123", &HashMap::new()).unwrap();
        assert_eq!(headers.get(GOOG_API_KEY).unwrap(), "k-123");
        assert!(headers.get(GOOG_API_KEY).unwrap().is_sensitive());
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn authorization_header_suppresses_api_key() {
        let mut custom = HashMap::new();
        custom.insert("Authorization".to_string(), "Bearer t".to_string());
        let headers = gemini_headers("k-123", &custom).unwrap();
        assert!(headers.get(GOOG_API_KEY).is_none());
        assert_eq!(headers.get("authorization").unwrap(), "Bearer t");
    }

    #[test]
    fn empty_key_adds_nothing() {
        let headers = gemini_headers("", &HashMap::new()).unwrap();
        assert!(headers.get(GOOG_API_KEY).is_none());
    }

    #[test]
    fn invalid_header_name_is_configuration_error() {
        let mut custom = HashMap::new();
        custom.insert("bad header".to_string(), "v".to_string());
        let err = gemini_headers("k", &custom).unwrap_err();
        assert!(matches!(err, LlmError::ConfigurationError(_)));
    }
}
