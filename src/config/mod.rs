//! Resume data management
//!
//! This module contains the configuration system components:
//! - `types`: locale descriptors and the merged per-locale contexts
//! - `loader`: YAML loading and last-write-wins merging

pub mod loader;
pub mod types;


// Re-export commonly used types for convenience
pub use types::{Config, LocaleDescriptor, ProjectPaths};
