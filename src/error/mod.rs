//! Error Handling Module
//!
//! Two layers of errors live here:
//! - `LlmError` for failures of the external vision model call
//! - `ScanError` for the reasons a scan produced no result
//!
//! # Example
//!
//! ```rust
//! use paperscan::error::{ErrorCategory, LlmError};
//!
//! let error = LlmError::api_error(503, "model overloaded");
//! assert_eq!(error.category(), ErrorCategory::Server);
//! ```

mod conversions;
pub mod types;

pub use types::*;
