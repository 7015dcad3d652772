//! # paperscan
//!
//! Detect the questions printed on an exam page image with a vision model,
//! and turn the model's free-form reply into typed, validated data.
//!
//! ## Features
//!
//! - **Typed results**: [`ScanResult`] / [`Question`] with a [`QuestionKind`]
//!   enum and a finite [`BoundingBox`].
//! - **Tolerant extraction**: the JSON payload is located inside prose or
//!   markdown fences, parsed, and checked against a JSON Schema before use.
//! - **Diagnosable failures**: every failure has a [`ScanError`] variant;
//!   the `Option` APIs collapse them for callers that only care about success.
//! - **Pluggable models**: anything implementing [`VisionCapability`] can be
//!   scanned with; a Gemini client ships behind the `google` feature.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use paperscan::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GeminiClient::builder()
//!         .api_key("your-api-key")
//!         .structured_output(true)
//!         .build()?;
//!
//!     let image = ImageInput::from_path("page-01.png").await?;
//!     match QuestionScanner::new(client).try_scan(&image).await {
//!         Ok(result) => {
//!             for q in &result.questions {
//!                 println!("Q{} {} {:?}", q.number, q.kind, q.bounding_box.to_array());
//!             }
//!         }
//!         Err(e) => eprintln!("scan failed ({}): {e}", e.kind()),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Extraction alone needs no network:
//!
//! ```rust
//! let result = paperscan::extract::extract(r#"{"questions":[]}"#);
//! assert!(result.is_some_and(|r| r.is_empty()));
//! ```
#![deny(unsafe_code)]

pub mod error;
pub mod extract;
pub mod image;
pub mod prompt;
pub mod providers;
pub mod scanner;
pub mod telemetry;
pub mod traits;
pub mod types;
pub mod utils;

pub use error::{LlmError, ScanError, ScanFailureKind};
pub use extract::{ExtractionStrategy, ResponseExtractor};
pub use image::ImageInput;
pub use scanner::{QuestionScanner, ScannerOptions};
pub use traits::VisionCapability;
pub use types::{BoundingBox, Question, QuestionKind, ScanResult};

#[cfg(feature = "google")]
pub use scanner::scan_page;

/// Common imports
pub mod prelude {
    pub use crate::error::{ErrorCategory, LlmError, ScanError, ScanFailureKind};
    pub use crate::extract::{ExtractionStrategy, ResponseExtractor, extract, try_extract};
    pub use crate::image::ImageInput;
    pub use crate::scanner::{QuestionScanner, ScannerOptions};
    pub use crate::traits::VisionCapability;
    pub use crate::types::{BoundingBox, Question, QuestionKind, ScanResult};

    #[cfg(feature = "google")]
    pub use crate::providers::gemini::{GeminiBuilder, GeminiClient, GeminiConfig};
}
