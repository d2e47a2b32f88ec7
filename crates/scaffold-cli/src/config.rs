//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `SCAFFOLD_` prefix, `__` between sections,
//!    e.g. `SCAFFOLD_FILES__OVERWRITE=false`
//! 3. Config file: `--config FILE` if given, otherwise the platform config
//!    file and then `./.scaffold.toml` (both optional)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;

const ENV_PREFIX: &str = "SCAFFOLD";
const LOCAL_CONFIG: &str = ".scaffold.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fallbacks for flags the user left out.
    pub defaults: Defaults,
    /// Treatment of files that already exist.
    pub files: FilesConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Base directory used when `--base` is absent.
    pub base: PathBuf,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            base: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Rewrite declared files that already exist.
    pub overwrite: bool,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self { overwrite: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: OutputFormat,
}

impl AppConfig {
    /// Load configuration from defaults, file(s) and environment.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&Self::default()).context("Failed to encode default configuration")?,
        );

        match config_file {
            Some(path) => {
                if !path.is_file() {
                    anyhow::bail!("Configuration file not found: {}", path.display());
                }
                builder = builder.add_source(File::from(path.as_path()).required(true));
            }
            None => {
                if let Some(global) = Self::config_path() {
                    builder = builder.add_source(File::from(global).required(false));
                }
                builder = builder.add_source(File::from(Path::new(LOCAL_CONFIG)).required(false));
            }
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the platform configuration file, if a home directory is known.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "scaffold")
            .map(|d| d.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_reference_behaviour() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.base, PathBuf::from("."));
        assert!(cfg.files.overwrite);
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.output.format, OutputFormat::Auto);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("scaffold.toml");
        fs::write(
            &path,
            "[defaults]\nbase = \"out\"\n\n[files]\noverwrite = false\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.base, PathBuf::from("out"));
        assert!(!cfg.files.overwrite);
        // untouched sections keep their defaults
        assert_eq!(cfg.output, OutputConfig::default());
    }

    #[test]
    fn output_format_is_read_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("scaffold.toml");
        fs::write(&path, "[output]\nformat = \"json\"\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.output.format, OutputFormat::Json);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here/scaffold.toml");
        let err = AppConfig::load(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("not found"), "{err}");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("scaffold.toml");
        fs::write(&path, "[files]\noverwrite = \"sometimes\"\n").unwrap();

        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn config_path_ends_with_file_name() {
        if let Some(p) = AppConfig::config_path() {
            assert!(p.ends_with("config.toml"));
        }
    }
}
