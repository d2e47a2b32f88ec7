// ============================================================================
// domain/error.rs - DESCRIPTOR VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// Every variant is raised while a descriptor is loaded or validated, so a
/// domain error always means "nothing on disk was touched".
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("duplicate name '{name}' in {parent}")]
    DuplicateName { parent: String, name: String },

    #[error("invalid entry name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("top-level entry '{name}' must be a directory")]
    RootNotDirectory { name: String },

    #[error("{0}")]
    InvalidDescriptor(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DuplicateName { parent, name } => vec![
                format!("'{name}' is declared more than once under {parent}"),
                "Sibling names must be unique; merge or rename one of them".into(),
                "Nothing was created".into(),
            ],
            Self::InvalidName { name, .. } => vec![
                format!("'{name}' cannot be used as a file or folder name"),
                "Names must be non-empty and must not contain '/' or '\\'".into(),
                "'.' and '..' are reserved".into(),
            ],
            Self::RootNotDirectory { .. } => vec![
                "The descriptor must be a mapping of names to files or folders".into(),
                r#"Example: {"A": {"x.txt": "hi", "B": {}}}"#.into(),
            ],
            Self::InvalidDescriptor(_) => vec![
                "A string value declares a file, a nested mapping declares a folder".into(),
                "Check the descriptor syntax (JSON or TOML)".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}
