//! Core domain layer for Scaffold.
//!
//! Pure data and rules: the declared tree, the report of a walk, and the
//! validation that must pass before anything touches the filesystem.
//!
//! - **No I/O**: filesystem access goes through `application::ports`
//! - **Immutable trees**: a `TreeNode` is never modified once built

pub mod entities;
pub mod error;

mod validation;

// Re-exports for convenience
pub use entities::{
    report::{CreationReport, EntryKind, ReportEntry},
    tree::{NodeKind, ROOT_NAME, TreeNode, TreeStats},
};

pub use error::DomainError;

pub use validation::DomainValidator;
