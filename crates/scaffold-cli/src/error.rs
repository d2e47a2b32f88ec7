//! Error handling for the Scaffold CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use scaffold_core::error::{Aborted, ScaffoldError};

pub use scaffold_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input not caught by argument parsing.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Loading or validating the tree failed before anything was created.
    #[error("{0}")]
    Core(#[from] ScaffoldError),

    /// The walk stopped part-way; `created` entries stay on disk.
    #[error("Scaffolding stopped after {created} created entries: {source}")]
    Aborted {
        #[source]
        source: ScaffoldError,
        created: usize,
    },

    /// Writing to the terminal failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<Aborted> for CliError {
    fn from(aborted: Aborted) -> Self {
        let (source, partial) = aborted.into_parts();
        CliError::Aborted {
            source,
            created: partial.len(),
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message } => vec![
                format!("Check your input: {message}"),
                "Use --help for usage information".into(),
            ],

            Self::ConfigError { message, .. } => {
                let mut suggestions = vec![format!("Configuration issue: {message}")];
                if let Some(path) = crate::config::AppConfig::config_path() {
                    suggestions.push(format!("Check your config file at {}", path.display()));
                }
                suggestions.push("Check SCAFFOLD_* environment variables".into());
                suggestions
            }

            Self::Core(core) => core.suggestions(),

            Self::Aborted { source, created } => {
                let mut suggestions = source.suggestions();
                if *created > 0 {
                    suggestions.push(format!(
                        "{created} entries were created before the failure and were left in place"
                    ));
                    suggestions.push(
                        "Fix the problem and run again: existing folders are reused".into(),
                    );
                }
                suggestions
            }

            Self::IoError { .. } => vec!["Check that stdout/stderr are writable".into()],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) | Self::Aborted { source: core, .. } => match core.category() {
                CoreCategory::Validation | CoreCategory::Conflict => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for a terminal: red header, yellow suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, true)
    }

    /// Same layout as [`Self::format_colored`] without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, false)
    }

    fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> String| {
            if color { style(text) } else { text.to_owned() }
        };
        let mut out = String::new();

        out.push_str(&format!(
            "\n{}{}\n",
            paint("Error: ", |t| t.red().bold().to_string()),
            paint(&self.to_string(), |t| t.red().to_string()),
        ));

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                out.push_str(&format!(
                    "  {} {}\n",
                    paint("Caused by:", |t| t.dimmed().to_string()),
                    err
                ));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!(
                "\n{}\n",
                paint("Suggestions:", |t| t.yellow().bold().to_string())
            ));
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str(&format!(
                "\n{}\n",
                paint("Use -v / --verbose for more details.", |t| t.dimmed().to_string())
            ));
        }

        out
    }

    /// Emit the error as a tracing event at a severity matching its category.
    pub fn log(&self) {
        let category = self.category();
        match category {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(?category, error = %self, "Scaffold failed")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(?category, error = %self, "Scaffold failed")
            }
        }
        if let Some(source) = self.source() {
            tracing::debug!(%source, "Underlying cause");
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (bad descriptor, bad base path, conflicts).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io, path::PathBuf, sync::Arc};

    use scaffold_core::{
        application::ApplicationError,
        domain::{CreationReport, DomainError, EntryKind},
    };

    fn duplicate() -> CliError {
        CliError::Core(
            DomainError::DuplicateName {
                parent: "'A'".into(),
                name: "x".into(),
            }
            .into(),
        )
    }

    fn io_failure(kind: io::ErrorKind) -> ScaffoldError {
        ApplicationError::FilesystemError {
            path: PathBuf::from("/base/A"),
            operation: "create directory",
            source: Arc::new(io::Error::new(kind, "boom")),
        }
        .into()
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn validation_is_a_user_error() {
        assert_eq!(duplicate().exit_code(), 2);
    }

    #[test]
    fn invalid_input_is_a_user_error() {
        let err = CliError::InvalidInput {
            message: "x".into(),
        };
        assert_eq!(err.exit_code(), 2);
        assert!(err.suggestions().iter().any(|s| s.contains("--help")));
    }

    #[test]
    fn conflict_is_a_user_error() {
        let err: CliError = ScaffoldError::from(ApplicationError::PathKindConflict {
            path: PathBuf::from("/base/A"),
            expected: EntryKind::Directory,
            found: EntryKind::File,
        })
        .into();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn missing_file_is_not_found() {
        assert_eq!(CliError::Core(io_failure(io::ErrorKind::NotFound)).exit_code(), 3);
    }

    #[test]
    fn configuration_exit_code() {
        let err = CliError::ConfigError {
            message: "x".into(),
            source: None,
        };
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn permission_failure_is_internal() {
        let err = CliError::Core(io_failure(io::ErrorKind::PermissionDenied));
        assert_eq!(err.exit_code(), 1);
    }

    // ── aborted ───────────────────────────────────────────────────────────

    #[test]
    fn aborted_keeps_category_and_counts_partial() {
        let aborted = Aborted {
            error: io_failure(io::ErrorKind::PermissionDenied),
            partial: CreationReport::default(),
        };
        let err = CliError::from(aborted);
        assert!(matches!(err, CliError::Aborted { created: 0, .. }));
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("/base/A"), "{err}");
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_header_and_suggestions() {
        let s = duplicate().format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause() {
        let err = CliError::Aborted {
            source: io_failure(io::ErrorKind::PermissionDenied),
            created: 2,
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by:"));
        assert!(!s.contains("Use -v"));
    }

    #[test]
    fn format_colored_mentions_message() {
        let s = duplicate().format_colored(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("x"));
    }
}
