use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Kind of a filesystem entry, as declared or as found on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    /// Word used in the `Created <label>: <path>` log lines.
    pub const fn label(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "folder",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Directory => write!(f, "directory"),
        }
    }
}

/// One `(path, kind)` pair of a report or a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl ReportEntry {
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Created {}: {}", self.kind.label(), self.path.display())
    }
}

/// What a walk did, in creation order.
///
/// `entries` lists exactly the paths written by this run (new folders, new
/// or overwritten files). `skipped` lists declared paths that were left
/// alone: folders that already existed and files kept by
/// [`OverwritePolicy::Preserve`](crate::application::OverwritePolicy).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreationReport {
    entries: Vec<ReportEntry>,
    skipped: Vec<ReportEntry>,
}

impl CreationReport {
    pub(crate) fn record_created(&mut self, path: &Path, kind: EntryKind) {
        self.entries.push(ReportEntry::new(path, kind));
    }

    pub(crate) fn record_skipped(&mut self, path: &Path, kind: EntryKind) {
        self.skipped.push(ReportEntry::new(path, kind));
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn skipped(&self) -> &[ReportEntry] {
        &self.skipped
    }

    /// Number of created entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn files(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| e.kind == EntryKind::File)
    }

    pub fn directories(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries
            .iter()
            .filter(|e| e.kind == EntryKind::Directory)
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        self.entries.iter().any(|e| e.path == path)
    }
}

impl<'a> IntoIterator for &'a CreationReport {
    type Item = &'a ReportEntry;
    type IntoIter = std::slice::Iter<'a, ReportEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
