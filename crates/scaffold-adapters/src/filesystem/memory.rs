//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    io,
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock},
};

use scaffold_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::{EntryKind, ReportEntry},
    error::ScaffoldResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to a `Scaffolder` and
/// inspect the other. Failures can be injected per path with
/// [`fail_on`](Self::fail_on). A lock poisoned by a panicking test thread is
/// recovered rather than reported: the maps are never left half-updated.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    read_only: HashSet<PathBuf>,
    failures: HashSet<PathBuf>,
    journal: Vec<ReportEntry>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`add_dir`](Self::add_dir).
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.add_dir(path);
        self
    }

    /// Seed a directory and all of its ancestors. Not journaled.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut inner = self.write();
        let mut current = PathBuf::new();
        for component in path.as_ref().components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
    }

    /// Seed a file (and its parent directories). Not journaled.
    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.write().files.insert(path.to_path_buf(), content.to_string());
    }

    /// Make the directory at `path` reject new entries.
    pub fn set_read_only(&self, path: impl AsRef<Path>) {
        self.write().read_only.insert(path.as_ref().to_path_buf());
    }

    /// Make every create/write at exactly `path` fail.
    pub fn fail_on(&self, path: impl AsRef<Path>) {
        self.write().failures.insert(path.as_ref().to_path_buf());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.read().files.get(path.as_ref()).cloned()
    }

    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        self.read().directories.contains(path.as_ref())
    }

    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        let inner = self.read();
        let path = path.as_ref();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    /// Every successful `create_dir` / `write_file`, in call order.
    pub fn mutations(&self) -> Vec<ReportEntry> {
        self.read().journal.clone()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MemoryFilesystemInner {
    /// Checks shared by every mutation: injected failure, parent present and
    /// writable.
    fn check_mutation(&self, path: &Path, operation: &'static str) -> ScaffoldResult<()> {
        if self.failures.contains(path) {
            return Err(ApplicationError::io(path, operation, io::Error::other("injected failure")).into());
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !self.directories.contains(parent) {
                return Err(ApplicationError::io(
                    path,
                    operation,
                    io::Error::new(io::ErrorKind::NotFound, "parent directory does not exist"),
                )
                .into());
            }
            if self.read_only.contains(parent) {
                return Err(ApplicationError::io(
                    path,
                    operation,
                    io::Error::new(io::ErrorKind::PermissionDenied, "read-only directory"),
                )
                .into());
            }
        }
        Ok(())
    }
}

impl Filesystem for MemoryFilesystem {
    fn entry_kind(&self, path: &Path) -> ScaffoldResult<Option<EntryKind>> {
        let inner = self.read();

        Ok(if inner.directories.contains(path) {
            Some(EntryKind::Directory)
        } else if inner.files.contains_key(path) {
            Some(EntryKind::File)
        } else {
            None
        })
    }

    fn is_read_only(&self, path: &Path) -> ScaffoldResult<bool> {
        let inner = self.read();
        Ok(inner.read_only.contains(path))
    }

    fn create_dir(&self, path: &Path) -> ScaffoldResult<()> {
        let mut inner = self.write();

        inner.check_mutation(path, "create directory")?;
        if inner.directories.contains(path) || inner.files.contains_key(path) {
            return Err(ApplicationError::io(
                path,
                "create directory",
                io::Error::new(io::ErrorKind::AlreadyExists, "entry exists"),
            )
            .into());
        }

        inner.directories.insert(path.to_path_buf());
        inner
            .journal
            .push(ReportEntry::new(path, EntryKind::Directory));
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        let mut inner = self.write();

        inner.check_mutation(path, "write file")?;
        if inner.directories.contains(path) {
            return Err(ApplicationError::io(
                path,
                "write file",
                io::Error::new(io::ErrorKind::IsADirectory, "is a directory"),
            )
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        inner.journal.push(ReportEntry::new(path, EntryKind::File));
        Ok(())
    }
}
