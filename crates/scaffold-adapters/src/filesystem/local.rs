//! Local filesystem adapter using std::fs.

use std::fs;
use std::io;
use std::path::Path;

use scaffold_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::EntryKind,
    error::{ScaffoldError, ScaffoldResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn entry_kind(&self, path: &Path) -> ScaffoldResult<Option<EntryKind>> {
        // Follows symlinks: a link to a folder counts as a folder.
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Ok(Some(EntryKind::Directory)),
            Ok(_) => Ok(Some(EntryKind::File)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(map_io_error(path, e, "inspect")),
        }
    }

    fn is_read_only(&self, path: &Path) -> ScaffoldResult<bool> {
        let meta = fs::metadata(path).map_err(|e| map_io_error(path, e, "read permissions of"))?;
        Ok(meta.permissions().readonly() || !can_add_entries(path))
    }

    fn create_dir(&self, path: &Path) -> ScaffoldResult<()> {
        fs::create_dir(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

/// Whether this process may create entries inside the directory at `path`.
///
/// `Permissions::readonly` only looks at the mode bits, not at who they apply
/// to, so a folder owned by someone else still looks writable.
#[cfg(unix)]
fn can_add_entries(path: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: `c_path` is a valid NUL-terminated string that outlives the call.
    unsafe { libc::access(c_path.as_ptr(), libc::W_OK | libc::X_OK) == 0 }
}

#[cfg(not(unix))]
fn can_add_entries(_path: &Path) -> bool {
    true
}

fn map_io_error(path: &Path, e: io::Error, operation: &'static str) -> ScaffoldError {
    ApplicationError::io(path, operation, e).into()
}
