//! Gemini wire types and configuration

mod config;
mod generation;

pub use config::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig};
pub use generation::*;
