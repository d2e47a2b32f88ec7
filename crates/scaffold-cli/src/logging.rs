//! Tracing subscriber initialisation.
//!
//! Only the CLI crate calls [`init_logging`]; `scaffold-core` and
//! `scaffold-adapters` only *emit* spans and events.
//!
//! # Verbosity mapping
//!
//! | Flag(s)  | Filter level |
//! |----------|--------------|
//! | (none)   | WARN         |
//! | `-v`     | INFO         |
//! | `-vv`    | DEBUG        |
//! | `-vvv`   | TRACE        |
//! | `--quiet`| ERROR        |
//!
//! `RUST_LOG` overrides all of the above if set. Logs always go to stderr;
//! when the resolved output format is JSON (from `--output-format` or
//! `output.format` in the config) they are emitted as JSON lines so both
//! streams stay machine-readable.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::output::resolve_format;

/// How log lines are rendered on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogStyle {
    Json,
    Text { ansi: bool },
}

/// Initialise the global tracing subscriber.
///
/// `config` is `None` when the configuration failed to load; the flags alone
/// then decide the style. Must be called exactly once, before any tracing
/// macros fire.
pub fn init_logging(args: &GlobalArgs, config: Option<&AppConfig>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(derive_level(args))));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    let registry = tracing_subscriber::registry().with(filter);
    let result = match log_style(args, config, std::io::stderr().is_terminal()) {
        LogStyle::Json => registry.with(fmt_layer.json()).try_init(),
        LogStyle::Text { ansi } => registry
            .with(fmt_layer.with_target(false).with_ansi(ansi))
            .try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn log_style(args: &GlobalArgs, config: Option<&AppConfig>, stderr_is_tty: bool) -> LogStyle {
    if resolve_format(args, config) == OutputFormat::Json {
        return LogStyle::Json;
    }
    let no_color = args.no_color || config.is_some_and(|c| c.output.no_color);
    LogStyle::Text {
        ansi: stderr_is_tty && !no_color,
    }
}

/// Same level for the binary and both library crates.
fn filter_directives(level: &str) -> String {
    format!("scaffold={level},scaffold_core={level},scaffold_adapters={level}")
}

/// Translate the verbosity counter + quiet flag to a level string.
fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
