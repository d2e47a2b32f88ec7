//! Descriptor loader.
//!
//! Parses a tree descriptor (JSON or TOML) into a validated domain
//! [`TreeNode`] ready for the scaffolder.
//!
//! # Descriptor format
//!
//! The top-level mapping lists the entries created directly under the base
//! path. A string value declares a file with that content; a nested mapping
//! declares a folder.
//!
//! ```json
//! {
//!   "A": {
//!     "x.txt": "hi",
//!     "B": {}
//!   }
//! }
//! ```
//!
//! The same tree in TOML (names containing dots must be quoted):
//!
//! ```toml
//! [A]
//! "x.txt" = "hi"
//!
//! [A.B]
//! ```
//!
//! Keys are kept in the order they are written; that order is the creation
//! order. Repeated keys are kept too, so validation can reject them with a
//! precise error instead of one value silently replacing the other.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, Visitor},
};
use tracing::{debug, instrument};

use scaffold_core::{
    application::ApplicationError,
    domain::{DomainError, DomainValidator as validator, TreeNode},
    error::ScaffoldResult,
};

// ── Descriptor types ──────────────────────────────────────────────────────────

/// Deserialised mapping of names to entries, in declared order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptorMap(pub Vec<(String, DescriptorEntry)>);

/// One value of a [`DescriptorMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorEntry {
    /// A string: file content.
    File(String),
    /// A nested mapping: folder children.
    Directory(DescriptorMap),
}

impl DescriptorMap {
    /// Convert into a domain tree rooted at the implicit top-level folder.
    ///
    /// No validation happens here; see [`DomainValidator`](scaffold_core::domain::DomainValidator).
    pub fn into_tree(self) -> TreeNode {
        TreeNode::root(self.into_nodes())
    }

    fn into_nodes(self) -> Vec<TreeNode> {
        self.0
            .into_iter()
            .map(|(name, entry)| match entry {
                DescriptorEntry::File(content) => TreeNode::file(name, content),
                DescriptorEntry::Directory(children) => {
                    TreeNode::directory(name, children.into_nodes())
                }
            })
            .collect()
    }
}

impl<'de> Deserialize<'de> for DescriptorMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MapVisitor)
    }
}

impl<'de> Deserialize<'de> for DescriptorEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EntryVisitor)
    }
}

struct MapVisitor;

impl<'de> Visitor<'de> for MapVisitor {
    type Value = DescriptorMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping of names to files or folders")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((name, entry)) = map.next_entry::<String, DescriptorEntry>()? {
            entries.push((name, entry));
        }
        Ok(DescriptorMap(entries))
    }
}

struct EntryVisitor;

impl<'de> Visitor<'de> for EntryVisitor {
    type Value = DescriptorEntry;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("file content (a string) or a folder (a mapping)")
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(DescriptorEntry::File(v.to_owned()))
    }

    fn visit_string<E: serde::de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(DescriptorEntry::File(v))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        MapVisitor.visit_map(map).map(DescriptorEntry::Directory)
    }
}

// ── Format ────────────────────────────────────────────────────────────────────

/// Syntax of a descriptor file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DescriptorFormat {
    #[default]
    Json,
    Toml,
}

impl DescriptorFormat {
    /// Pick a format from the file extension; anything but `.toml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

impl fmt::Display for DescriptorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Toml => write!(f, "TOML"),
        }
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Loads a [`TreeNode`] from a descriptor file.
///
/// # Example
///
/// ```no_run
/// use scaffold_adapters::DescriptorLoader;
///
/// let tree = DescriptorLoader::new("layout.json").load()?;
/// println!("{}", tree.stats());
/// # Ok::<(), scaffold_core::error::ScaffoldError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DescriptorLoader {
    path: PathBuf,
    format: DescriptorFormat,
}

impl DescriptorLoader {
    /// Create a loader for `path`, inferring the format from its extension.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = DescriptorFormat::from_path(&path);
        Self { path, format }
    }

    /// Override the inferred format.
    pub fn with_format(mut self, format: DescriptorFormat) -> Self {
        self.format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> DescriptorFormat {
        self.format
    }

    /// Read, parse and validate the descriptor.
    ///
    /// # Errors
    ///
    /// - [`ApplicationError::FilesystemError`] if the file cannot be read.
    /// - [`DomainError::InvalidDescriptor`] if it is not a valid descriptor.
    /// - Any tree validation error (`DuplicateName`, `InvalidName`).
    #[instrument(skip(self), fields(path = %self.path.display(), format = %self.format))]
    pub fn load(&self) -> ScaffoldResult<TreeNode> {
        let raw = fs::read_to_string(&self.path)
            .map_err(|e| ApplicationError::io(&self.path, "read descriptor", e))?;

        let origin = format!("'{}'", self.path.display());
        parse_with_origin(&raw, self.format, &origin)
    }
}

/// Parse and validate descriptor text that did not come from a file.
pub fn parse_descriptor(raw: &str, format: DescriptorFormat) -> ScaffoldResult<TreeNode> {
    parse_with_origin(raw, format, "descriptor")
}

pub(crate) fn parse_with_origin(
    raw: &str,
    format: DescriptorFormat,
    origin: &str,
) -> ScaffoldResult<TreeNode> {
    let parsed = match format {
        DescriptorFormat::Json => serde_json::from_str::<DescriptorMap>(raw).map_err(|e| e.to_string()),
        DescriptorFormat::Toml => toml::from_str::<DescriptorMap>(raw).map_err(|e| e.to_string()),
    };
    let map = parsed.map_err(|e| {
        DomainError::InvalidDescriptor(format!("failed to parse {origin} as {format}: {e}"))
    })?;

    let tree = map.into_tree();
    validator::validate_tree(&tree)?;

    debug!(%origin, stats = %tree.stats(), "descriptor loaded");
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scaffold_core::domain::NodeKind;
    use scaffold_core::error::ScaffoldError;
    use tempfile::TempDir;

    fn names(node: &TreeNode) -> Vec<&str> {
        node.children().iter().map(TreeNode::name).collect()
    }

    // ── JSON ──────────────────────────────────────────────────────────────

    #[test]
    fn json_strings_are_files_and_objects_are_folders() {
        let tree = parse_descriptor(r#"{"A": {"x.txt": "hi", "B": {}}}"#, DescriptorFormat::Json)
            .unwrap();

        let a = tree.child("A").unwrap();
        assert!(a.is_directory());
        assert_eq!(a.child("x.txt").unwrap().content(), Some("hi"));
        assert!(matches!(
            a.child("B").unwrap().kind(),
            NodeKind::Directory { children } if children.is_empty()
        ));
    }

    #[test]
    fn json_keeps_declared_order() {
        let tree =
            parse_descriptor(r#"{"zeta": "", "alpha": {}, "mid": ""}"#, DescriptorFormat::Json)
                .unwrap();
        assert_eq!(names(&tree), ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn json_duplicate_keys_are_rejected() {
        let err = parse_descriptor(r#"{"A": {"x": "1", "x": "2"}}"#, DescriptorFormat::Json)
            .unwrap_err();
        match err {
            ScaffoldError::Domain(DomainError::DuplicateName { parent, name }) => {
                assert_eq!(name, "x");
                assert_eq!(parent, "'A'");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn json_non_string_values_are_invalid() {
        for raw in [r#"{"a": 1}"#, r#"{"a": ["x"]}"#, r#"{"a": null}"#, r#"{"a": true}"#] {
            let err = parse_descriptor(raw, DescriptorFormat::Json).unwrap_err();
            assert!(
                matches!(err, ScaffoldError::Domain(DomainError::InvalidDescriptor(_))),
                "{raw}: {err:?}"
            );
        }
    }

    #[test]
    fn json_top_level_must_be_an_object() {
        let err = parse_descriptor(r#""just a string""#, DescriptorFormat::Json).unwrap_err();
        assert!(err.to_string().contains("mapping"), "{err}");
    }

    #[test]
    fn json_path_separator_in_key_is_rejected() {
        let err = parse_descriptor(r#"{"a/b": ""}"#, DescriptorFormat::Json).unwrap_err();
        assert!(matches!(
            err,
            ScaffoldError::Domain(DomainError::InvalidName { .. })
        ));
    }

    // ── TOML ──────────────────────────────────────────────────────────────

    #[test]
    fn toml_tables_are_folders() {
        let raw = r##"
"README.md" = "# hello"

[A]
"x.txt" = "hi"

[A.B]
"##;
        let tree = parse_descriptor(raw, DescriptorFormat::Toml).unwrap();
        assert_eq!(tree.child("README.md").unwrap().content(), Some("# hello"));
        let a = tree.child("A").unwrap();
        assert_eq!(a.child("x.txt").unwrap().content(), Some("hi"));
        assert!(a.child("B").unwrap().is_directory());
    }

    #[test]
    fn toml_integer_is_invalid() {
        let err = parse_descriptor("a = 3", DescriptorFormat::Toml).unwrap_err();
        assert!(err.to_string().contains("TOML"), "{err}");
    }

    // ── Loader ────────────────────────────────────────────────────────────

    #[test]
    fn format_is_inferred_from_extension() {
        assert_eq!(DescriptorFormat::from_path(Path::new("a.toml")), DescriptorFormat::Toml);
        assert_eq!(DescriptorFormat::from_path(Path::new("a.TOML")), DescriptorFormat::Toml);
        assert_eq!(DescriptorFormat::from_path(Path::new("a.json")), DescriptorFormat::Json);
        assert_eq!(DescriptorFormat::from_path(Path::new("layout")), DescriptorFormat::Json);
    }

    #[test]
    fn load_reads_file_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("layout.json");
        fs::write(&path, r#"{"docs": {"api.md": ""}}"#).unwrap();

        let tree = DescriptorLoader::new(&path).load().unwrap();
        assert!(tree.child("docs").unwrap().child("api.md").is_some());
    }

    #[test]
    fn load_missing_file_names_the_path() {
        let err = DescriptorLoader::new("/definitely/not/here.json")
            .load()
            .unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"), "{err}");
        assert!(!err.is_validation());
    }

    #[test]
    fn explicit_format_overrides_extension() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("layout.txt");
        fs::write(&path, "[src]\n\"main.rs\" = \"\"\n").unwrap();

        let loader = DescriptorLoader::new(&path).with_format(DescriptorFormat::Toml);
        assert_eq!(loader.format(), DescriptorFormat::Toml);
        let tree = loader.load().unwrap();
        assert!(tree.child("src").is_some());
    }

    #[test]
    fn parse_error_mentions_origin() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = DescriptorLoader::new(&path).load().unwrap_err();
        assert!(err.to_string().contains("broken.json"), "{err}");
        assert!(err.is_validation());
    }
}
