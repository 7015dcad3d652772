//! Capability traits

mod vision;

pub use vision::VisionCapability;
