//! Build configuration for pyframeworks
//!
//! This module contains:
//! - [`environment`]: the build-system environment, read once at the CLI boundary
//! - [`paths`]: resolution of build trees and default framework destinations

pub mod environment;
pub mod paths;

// Re-export commonly used types
pub use environment::BuildEnvironment;
pub use paths::{FrameworkPaths, resolve_build_root};
