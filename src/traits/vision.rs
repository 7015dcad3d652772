//! Vision capability trait

use crate::error::LlmError;
use crate::image::ImageInput;
use async_trait::async_trait;
use std::sync::Arc;

/// A model that answers an instruction about one image with free-form text.
///
/// Implementations make a single request per call: no retry, no internal
/// timeout beyond what the transport enforces.
#[async_trait]
pub trait VisionCapability: Send + Sync {
    async fn generate(&self, image: &ImageInput, instruction: &str) -> Result<String, LlmError>;

    /// Identifier used in logs
    fn provider_id(&self) -> &str {
        "unknown"
    }
}

#[async_trait]
impl<T: VisionCapability + ?Sized> VisionCapability for Arc<T> {
    async fn generate(&self, image: &ImageInput, instruction: &str) -> Result<String, LlmError> {
        (**self).generate(image, instruction).await
    }

    fn provider_id(&self) -> &str {
        (**self).provider_id()
    }
}

#[async_trait]
impl<T: VisionCapability + ?Sized> VisionCapability for Box<T> {
    async fn generate(&self, image: &ImageInput, instruction: &str) -> Result<String, LlmError> {
        (**self).generate(image, instruction).await
    }

    fn provider_id(&self) -> &str {
        (**self).provider_id()
    }
}
