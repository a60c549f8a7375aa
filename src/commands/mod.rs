//! Command implementations for the pyframeworks CLI

pub mod completions;
pub mod frameworks;
pub mod install_deps;
pub mod replace;
pub mod version;
