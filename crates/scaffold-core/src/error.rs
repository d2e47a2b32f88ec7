//! Unified error handling for Scaffold Core.
//!
//! [`ScaffoldError`] wraps domain (descriptor validation) and application
//! (filesystem orchestration) errors. [`Aborted`] is what a walk returns when
//! it stops early: the error plus everything created before it.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{CreationReport, DomainError};

/// Root error type for Scaffold Core operations.
#[derive(Debug, Error, Clone)]
pub enum ScaffoldError {
    /// The declared tree is malformed (raised before any mutation).
    #[error("Invalid descriptor: {0}")]
    Domain(#[from] DomainError),

    /// The filesystem rejected an operation during the walk.
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl ScaffoldError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }

    /// `true` if the error was raised before the filesystem was touched.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// A materialization that stopped at its first failure.
///
/// Entries created before the failure stay on disk; `partial` lists them in
/// creation order so the caller can show what succeeded.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct Aborted {
    pub error: ScaffoldError,
    pub partial: CreationReport,
}

impl Aborted {
    pub fn into_parts(self) -> (ScaffoldError, CreationReport) {
        (self.error, self.partial)
    }
}

impl From<ScaffoldError> for Aborted {
    fn from(error: ScaffoldError) -> Self {
        Self {
            error,
            partial: CreationReport::default(),
        }
    }
}

impl From<DomainError> for Aborted {
    fn from(error: DomainError) -> Self {
        ScaffoldError::from(error).into()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::EntryKind;

    #[test]
    fn domain_errors_are_validation() {
        let err = ScaffoldError::from(DomainError::DuplicateName {
            parent: "A".into(),
            name: "x".into(),
        });
        assert!(err.is_validation());
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn kind_conflict_is_conflict_category() {
        let err = ScaffoldError::from(ApplicationError::PathKindConflict {
            path: PathBuf::from("/tmp/t/A"),
            expected: EntryKind::Directory,
            found: EntryKind::File,
        });
        assert!(!err.is_validation());
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert!(err.to_string().contains("/tmp/t/A"));
    }

    #[test]
    fn aborted_from_validation_error_has_empty_report() {
        let aborted = Aborted::from(DomainError::RootNotDirectory {
            name: "x.txt".into(),
        });
        assert!(aborted.partial.is_empty());
        assert!(aborted.to_string().contains("x.txt"));
    }
}
