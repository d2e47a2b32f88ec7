//! Application layer errors.
//!
//! These errors represent failures while talking to the filesystem, not
//! problems with the declared tree. Tree problems are `DomainError`s.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::domain::EntryKind;
use crate::error::ErrorCategory;

/// Errors that occur during a walk.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The base path is missing, not a directory, or read-only.
    #[error("Invalid base path {path}: {reason}")]
    InvalidBasePath { path: PathBuf, reason: String },

    /// Something already exists at a declared path with the other kind.
    #[error("Cannot create {expected} at {path}: a {found} already exists there")]
    PathKindConflict {
        path: PathBuf,
        expected: EntryKind,
        found: EntryKind,
    },

    /// An underlying create/write/inspect call failed.
    #[error("Failed to {operation} {path}: {source}")]
    FilesystemError {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: Arc<io::Error>,
    },
}

impl ApplicationError {
    /// Wrap an I/O failure with the path and the operation that caused it.
    pub fn io(path: impl Into<PathBuf>, operation: &'static str, source: io::Error) -> Self {
        Self::FilesystemError {
            path: path.into(),
            operation,
            source: Arc::new(source),
        }
    }

    /// The path this error is about.
    pub fn path(&self) -> &Path {
        match self {
            Self::InvalidBasePath { path, .. }
            | Self::PathKindConflict { path, .. }
            | Self::FilesystemError { path, .. } => path,
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidBasePath { path, .. } => vec![
                format!("Base path: {}", path.display()),
                "The base path must be an existing, writable directory".into(),
                "Create it first or pass a different one with --base".into(),
            ],
            Self::PathKindConflict {
                path,
                expected,
                found,
            } => vec![
                format!("'{}' is a {found}, the descriptor declares a {expected}", path.display()),
                "Rename or remove the existing entry, or change the descriptor".into(),
                "Entries created before this point were kept; re-running is safe".into(),
            ],
            Self::FilesystemError { path, source, .. } => {
                let mut suggestions = vec![format!("Failed to access: {}", path.display())];
                match source.kind() {
                    io::ErrorKind::PermissionDenied => {
                        suggestions.push("Check that you have write permissions".into())
                    }
                    io::ErrorKind::NotFound => {
                        suggestions.push("Ensure the parent directory exists".into())
                    }
                    _ => suggestions.push("Check available disk space and name length".into()),
                }
                suggestions
                    .push("Entries created before this point were kept; re-running is safe".into());
                suggestions
            }
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidBasePath { .. } => ErrorCategory::Validation,
            Self::PathKindConflict { .. } => ErrorCategory::Conflict,
            Self::FilesystemError { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                ErrorCategory::NotFound
            }
            Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }
}
