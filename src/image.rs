//! Page image payloads
//!
//! The bytes are sent to the model as-is; no resizing or re-encoding happens
//! here.

use base64::{Engine, engine::general_purpose::STANDARD};
use std::path::Path;

use crate::error::LlmError;
use crate::utils::mime;

/// Binary image data plus its declared MIME type.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageInput {
    data: Vec<u8>,
    mime_type: String,
}

impl ImageInput {
    /// Wrap bytes with an explicit MIME type.
    pub fn new(data: impl Into<Vec<u8>>, mime_type: impl Into<String>) -> Result<Self, LlmError> {
        let data = data.into();
        let mime_type = mime_type.into();
        if data.is_empty() {
            return Err(LlmError::InvalidInput("Image data is empty".to_string()));
        }
        if mime_type.trim().is_empty() {
            return Err(LlmError::InvalidInput("Image MIME type is empty".to_string()));
        }
        if !mime::is_image_mime(&mime_type) {
            tracing::warn!(mime_type = %mime_type, "sending non-image payload to vision model");
        }
        Ok(Self { data, mime_type })
    }

    /// Wrap bytes, detecting the MIME type from their content.
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Result<Self, LlmError> {
        let data = data.into();
        let mime_type = mime::detect_mime(&data, None);
        Self::new(data, mime_type)
    }

    /// Read an image file, detecting the MIME type from content, then extension.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, LlmError> {
        let path = path.as_ref();
        let data = tokio::fs::read(path)
            .await
            .map_err(|e| LlmError::IoError(format!("read {}: {e}", path.display())))?;
        let mime_type = mime::detect_mime(&data, path.to_str());
        Self::new(data, mime_type)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Standard (padded) base64 of the image bytes
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.data)
    }
}

impl std::fmt::Debug for ImageInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageInput")
            .field("mime_type", &self.mime_type)
            .field("len", &self.data.len())
            .finish()
    }
}
