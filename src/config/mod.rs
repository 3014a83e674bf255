//! Configuration module for the confluence dashboard.

pub mod artifacts;

mod debug; // Private: files use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod demo;
pub mod feedback;

// Re-export commonly used items
pub use artifacts::{ARTIFACTS, ArtifactResource};
pub use demo::DEMO;
pub use feedback::FEEDBACK;
