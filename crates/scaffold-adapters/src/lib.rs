//! Infrastructure adapters for Scaffold.
//!
//! This crate implements the ports defined in `scaffold-core::application::ports`
//! and turns descriptor files into domain trees.
//! It contains all external dependencies and I/O operations.

pub mod descriptor_loader;
pub mod filesystem;
pub mod presets;

// Re-export commonly used adapters
pub use descriptor_loader::{DescriptorFormat, DescriptorLoader, parse_descriptor};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use presets::Preset;
