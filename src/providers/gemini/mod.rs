//! Google Gemini provider
//!
//! Sends page images to the Gemini `generateContent` API and returns the
//! answer text for extraction.

pub mod builder;
pub mod client;
pub mod convert;
pub mod types;

pub use builder::GeminiBuilder;
pub use client::GeminiClient;
pub use types::{GeminiConfig, GenerationConfig};
