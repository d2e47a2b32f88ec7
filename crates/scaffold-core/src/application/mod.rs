//! Application layer for Scaffold.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`Scaffolder`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer walks the domain tree and drives the ports. The
//! rules about what a valid tree is live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{OverwritePolicy, Scaffolder};

// Re-export port traits (for adapter implementation)
pub use ports::Filesystem;

pub use error::ApplicationError;
