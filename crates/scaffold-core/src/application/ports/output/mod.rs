//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `scaffold-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::EntryKind;
use crate::error::ScaffoldResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `scaffold_adapters::filesystem::LocalFilesystem` (production)
/// - `scaffold_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `create_dir` creates exactly one level; the parent must already exist
/// - `write_file` creates or truncates
/// - Inspection never mutates, so a dry run only calls `entry_kind` and
///   `is_read_only`
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Kind of the entry at `path`, or `None` if nothing exists there.
    fn entry_kind(&self, path: &Path) -> ScaffoldResult<Option<EntryKind>>;

    /// `true` if the directory at `path` does not accept new entries.
    fn is_read_only(&self, path: &Path) -> ScaffoldResult<bool>;

    /// Create a single directory.
    fn create_dir(&self, path: &Path) -> ScaffoldResult<()>;

    /// Create or overwrite a file with `content`.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;
}
