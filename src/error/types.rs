//! Core error types.

use thiserror::Error;

/// Errors raised while talking to the vision model service.
///
/// These cover transport, authentication, quota and response-shape problems
/// of the external call. Failures of the extraction step itself are reported
/// through [`ScanError`].
#[derive(Error, Debug, Clone)]
pub enum LlmError {
    /// HTTP transport failure (connection, TLS, timeout, body read)
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Non-success response that did not map to a more specific variant
    #[error("API error: {code} - {message}")]
    ApiError {
        code: u16,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// 401/403 from the service
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 429 from the service
    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    /// 404 from the service (usually an unknown model)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid client configuration (missing key, bad header value, ...)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Caller supplied unusable input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The service answered, but not in the expected shape
    #[error("Parse error: {0}")]
    ParseError(String),

    /// JSON (de)serialization failure
    #[error("JSON error: {0}")]
    JsonError(String),

    /// Local filesystem failure
    #[error("IO error: {0}")]
    IoError(String),
}

/// Coarse grouping of [`LlmError`] for logging and presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Authentication,
    RateLimit,
    Client,
    Server,
    Parsing,
    Configuration,
    Unknown,
}

impl LlmError {
    /// Convenience constructor for [`LlmError::ApiError`] without details.
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// HTTP status code carried by this error, when known.
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { code, .. } => Some(*code),
            Self::RateLimitError(_) => Some(429),
            Self::NotFound(_) => Some(404),
            _ => None,
        }
    }

    /// Classify the error.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::HttpError(_) => ErrorCategory::Network,
            Self::AuthenticationError(_) => ErrorCategory::Authentication,
            Self::RateLimitError(_) => ErrorCategory::RateLimit,
            Self::NotFound(_) | Self::InvalidInput(_) => ErrorCategory::Client,
            Self::ApiError { code, .. } => {
                if *code >= 500 {
                    ErrorCategory::Server
                } else if *code >= 400 {
                    ErrorCategory::Client
                } else {
                    ErrorCategory::Unknown
                }
            }
            Self::ParseError(_) | Self::JsonError(_) => ErrorCategory::Parsing,
            Self::ConfigurationError(_) => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::Unknown,
        }
    }
}

/// Why a scan produced no result.
///
/// The public `Option` APIs collapse all of these into `None`; the `try_*`
/// APIs hand them back so callers can log or branch on them.
#[derive(Error, Debug, Clone)]
pub enum ScanError {
    /// No JSON-shaped substring in the model's reply
    #[error("no JSON object found in model response")]
    NoPayload,

    /// A candidate substring was found but it is not valid JSON
    #[error("malformed JSON payload: {0}")]
    MalformedPayload(String),

    /// Valid JSON that does not describe a question list
    #[error("payload does not match the question schema: {0}")]
    SchemaMismatch(String),

    /// The model call itself failed
    #[error("vision service failure: {0}")]
    Service(#[from] LlmError),
}

/// Field-less discriminant of [`ScanError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanFailureKind {
    NoPayload,
    MalformedPayload,
    SchemaMismatch,
    Service,
}

impl ScanError {
    pub const fn kind(&self) -> ScanFailureKind {
        match self {
            Self::NoPayload => ScanFailureKind::NoPayload,
            Self::MalformedPayload(_) => ScanFailureKind::MalformedPayload,
            Self::SchemaMismatch(_) => ScanFailureKind::SchemaMismatch,
            Self::Service(_) => ScanFailureKind::Service,
        }
    }
}

impl std::fmt::Display for ScanFailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::NoPayload => "no_payload",
            Self::MalformedPayload => "malformed_payload",
            Self::SchemaMismatch => "schema_mismatch",
            Self::Service => "service",
        };
        f.write_str(s)
    }
}
