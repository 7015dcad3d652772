//! Vision model providers
//!
//! Each provider implements [`VisionCapability`](crate::traits::VisionCapability).

#[cfg(feature = "google")]
pub mod gemini;
