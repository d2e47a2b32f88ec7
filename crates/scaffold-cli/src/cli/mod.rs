//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

use scaffold_adapters::{DescriptorFormat, Preset};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "scaffold",
    bin_name = "scaffold",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Materialize a directory tree from a descriptor",
    long_about = "Scaffold reads a tree descriptor (JSON or TOML) and creates \
                  the declared folders and files under a base directory, \
                  in the order they are declared.",
    after_help = "EXAMPLES:\n\
        \x20 scaffold layout.json\n\
        \x20 scaffold layout.toml --base ./out --keep-existing\n\
        \x20 scaffold --preset myos --dry-run\n\
        \x20 scaffold layout.json --output-format json",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Verbosity, colour and output flags.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// What to scaffold and where.
    #[command(flatten)]
    pub scaffold: ScaffoldArgs,
}

// ── scaffold ──────────────────────────────────────────────────────────────────

/// What to create, where, and how to treat existing files.
#[derive(Debug, Args)]
pub struct ScaffoldArgs {
    /// Descriptor file. `.toml` files are read as TOML, anything else as
    /// JSON unless `--descriptor-format` says otherwise.
    #[arg(
        value_name = "DESCRIPTOR",
        required_unless_present = "preset",
        conflicts_with = "preset",
        help = "Tree descriptor file (JSON or TOML)"
    )]
    pub descriptor: Option<PathBuf>,

    /// Use a built-in tree instead of a descriptor file.
    #[arg(
        short = 'p',
        long = "preset",
        value_name = "NAME",
        value_parser = parse_preset,
        help = "Built-in tree to create (myos)"
    )]
    pub preset: Option<Preset>,

    /// Directory the tree is created under. Must already exist.
    #[arg(
        short = 'b',
        long = "base",
        value_name = "DIR",
        help = "Base directory [default: config `defaults.base`, or .]"
    )]
    pub base: Option<PathBuf>,

    /// Force the descriptor syntax.
    #[arg(
        long = "descriptor-format",
        value_name = "FORMAT",
        value_enum,
        help = "Descriptor syntax (inferred from the extension by default)"
    )]
    pub descriptor_format: Option<DescriptorFormatArg>,

    /// Overwrite existing files even if the configuration says otherwise.
    #[arg(
        short = 'f',
        long = "force",
        conflicts_with = "keep_existing",
        help = "Overwrite existing files"
    )]
    pub force: bool,

    /// Leave existing files untouched.
    #[arg(
        short = 'k',
        long = "keep-existing",
        help = "Keep existing files instead of overwriting them"
    )]
    pub keep_existing: bool,

    /// Print what would be created without touching the filesystem.
    #[arg(short = 'n', long = "dry-run", help = "Show the plan, create nothing")]
    pub dry_run: bool,
}

// ── Value enums ───────────────────────────────────────────────────────────────

/// Resolve `--preset` against the built-in catalog, case-insensitively.
fn parse_preset(name: &str) -> Result<Preset, String> {
    Preset::from_name(name).ok_or_else(|| {
        let available: Vec<String> = Preset::ALL
            .iter()
            .map(|p| format!("{}: {}", p.name(), p.description()))
            .collect();
        format!(
            "unknown preset '{name}'\n\navailable presets:\n  {}",
            available.join("\n  ")
        )
    })
}

/// Descriptor syntaxes accepted by `--descriptor-format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DescriptorFormatArg {
    Json,
    Toml,
}

impl From<DescriptorFormatArg> for DescriptorFormat {
    fn from(arg: DescriptorFormatArg) -> Self {
        match arg {
            DescriptorFormatArg::Json => DescriptorFormat::Json,
            DescriptorFormatArg::Toml => DescriptorFormat::Toml,
        }
    }
}
