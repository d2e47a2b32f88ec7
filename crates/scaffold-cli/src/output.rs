//! Output management and formatting.
//!
//! Human and plain output print one line per entry; JSON output prints a
//! single [`RunSummary`] document on stdout.

use std::io::{self, IsTerminal};
use std::path::Path;

use chrono::{DateTime, Utc};
use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use scaffold_core::prelude::{CreationReport, OverwritePolicy, ReportEntry};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

/// Machine-readable result of one invocation.
#[derive(Debug, Serialize)]
pub struct RunSummary<'a> {
    pub generated_at: DateTime<Utc>,
    pub base: &'a Path,
    pub policy: OverwritePolicy,
    pub dry_run: bool,
    pub status: RunStatus,
    /// Created entries, or planned entries for a dry run.
    pub entries: &'a [ReportEntry],
    /// Existing folders, and files kept under the preserve policy.
    pub skipped: &'a [ReportEntry],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Completed,
    Planned,
    Aborted,
}

impl<'a> RunSummary<'a> {
    pub fn completed(base: &'a Path, policy: OverwritePolicy, report: &'a CreationReport) -> Self {
        Self::from_report(base, policy, report, RunStatus::Completed, None)
    }

    pub fn aborted(
        base: &'a Path,
        policy: OverwritePolicy,
        partial: &'a CreationReport,
        error: String,
    ) -> Self {
        Self::from_report(base, policy, partial, RunStatus::Aborted, Some(error))
    }

    pub fn planned(base: &'a Path, policy: OverwritePolicy, plan: &'a CreationReport) -> Self {
        Self {
            dry_run: true,
            ..Self::from_report(base, policy, plan, RunStatus::Planned, None)
        }
    }

    fn from_report(
        base: &'a Path,
        policy: OverwritePolicy,
        report: &'a CreationReport,
        status: RunStatus,
        error: Option<String>,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            base,
            policy,
            dry_run: false,
            status,
            entries: report.entries(),
            skipped: report.skipped(),
            error,
        }
    }
}

/// The format in effect for this run, shared by stdout and the log layer.
///
/// The `--output-format` flag wins over `output.format`; `Auto` resolves to
/// Human on a TTY and Plain otherwise.
pub fn resolve_format(args: &GlobalArgs, config: Option<&AppConfig>) -> OutputFormat {
    let requested = args
        .output_format
        .or(config.map(|c| c.output.format))
        .unwrap_or_default();
    match requested {
        OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
        OutputFormat::Auto => OutputFormat::Plain,
        other => other,
    }
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let resolved_format = resolve_format(args, Some(config));

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode and JSON mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet || self.is_json() {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// `Created file: <path>` / `Created folder: <path>`.
    pub fn created(&self, entry: &ReportEntry) -> io::Result<()> {
        if self.no_color {
            self.print(&entry.to_string())
        } else {
            self.print(&format!(
                "{} {}",
                format!("Created {}:", entry.kind.label()).green(),
                entry.path.display()
            ))
        }
    }

    /// One dry-run line.
    pub fn planned(&self, entry: &ReportEntry) -> io::Result<()> {
        let label = format!("Would create {}:", entry.kind.label());
        if self.no_color {
            self.print(&format!("{label} {}", entry.path.display()))
        } else {
            self.print(&format!("{} {}", label.cyan(), entry.path.display()))
        }
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.print(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.print(&line)
    }

    /// Print the run summary as pretty JSON. Not suppressed by `--quiet`:
    /// asking for JSON means asking for the document.
    pub fn summary_json(&self, summary: &RunSummary<'_>) -> io::Result<()> {
        let doc = serde_json::to_string_pretty(summary).map_err(io::Error::other)?;
        self.term.write_line(&doc)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
