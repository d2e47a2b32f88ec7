//! Scaffolder - main application orchestrator.
//!
//! This service coordinates the whole workflow:
//! 1. Validate the declared tree (no filesystem access)
//! 2. Check the base path
//! 3. Walk the tree depth-first, creating folders before their children
//!
//! A failure stops the walk. Nothing is rolled back: directories are created
//! idempotently, so re-running after fixing the cause picks up where the
//! previous run stopped.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{
        CreationReport, DomainValidator as validator, EntryKind, NodeKind, TreeNode,
    },
    error::{Aborted, ScaffoldResult},
};

/// What to do with a declared file that already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverwritePolicy {
    /// Replace the content (files are always rewritten).
    #[default]
    Overwrite,
    /// Keep the existing file and record it as skipped.
    Preserve,
}

/// Whether a walk mutates the filesystem or only inspects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Apply,
    Plan,
}

/// Main scaffolding service.
pub struct Scaffolder {
    filesystem: Box<dyn Filesystem>,
    policy: OverwritePolicy,
}

impl Scaffolder {
    /// Create a scaffolder over the given filesystem adapter.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use scaffold_core::application::{Scaffolder, OverwritePolicy, ports::Filesystem};
    ///
    /// # let filesystem: Box<dyn Filesystem> = unimplemented!();
    /// let scaffolder = Scaffolder::new(filesystem).with_policy(OverwritePolicy::Preserve);
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            policy: OverwritePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: OverwritePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> OverwritePolicy {
        self.policy
    }

    /// Create every entry of `root` under `base`.
    ///
    /// Children are handled in declared order, depth-first pre-order. On
    /// failure the returned [`Aborted`] carries the entries created so far.
    #[instrument(skip_all, fields(base = %base.as_ref().display(), policy = ?self.policy))]
    pub fn materialize(
        &self,
        base: impl AsRef<Path>,
        root: &TreeNode,
    ) -> Result<CreationReport, Aborted> {
        let base = base.as_ref();

        // 1. Validate the tree before touching anything
        validator::validate_tree(root)?;

        // 2. Base path must be a writable directory
        self.check_base(base)?;

        info!(entries = root.stats().total(), "Scaffolding tree");

        // 3. Walk
        let mut report = CreationReport::default();
        match self.walk(base, root.children(), Mode::Apply, &mut report) {
            Ok(()) => {
                info!(
                    created = report.len(),
                    skipped = report.skipped().len(),
                    "Scaffold completed successfully"
                );
                Ok(report)
            }
            Err(error) => {
                warn!(
                    %error,
                    created = report.len(),
                    "Scaffold aborted; entries created so far are kept"
                );
                Err(Aborted {
                    error,
                    partial: report,
                })
            }
        }
    }

    /// What `materialize` would do against the filesystem as it is now.
    ///
    /// Runs the same checks and walk without mutating: `entries` lists what
    /// would be written, `skipped` lists existing folders and preserved files,
    /// and a kind conflict fails the plan just as it would fail the run.
    #[instrument(skip_all, fields(base = %base.as_ref().display(), policy = ?self.policy))]
    pub fn plan(&self, base: impl AsRef<Path>, root: &TreeNode) -> ScaffoldResult<CreationReport> {
        let base = base.as_ref();
        validator::validate_tree(root)?;
        self.check_base(base)?;

        let mut plan = CreationReport::default();
        self.walk(base, root.children(), Mode::Plan, &mut plan)?;
        debug!(
            entries = plan.len(),
            skipped = plan.skipped().len(),
            "Plan computed"
        );
        Ok(plan)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn check_base(&self, base: &Path) -> ScaffoldResult<()> {
        let reason = match self.filesystem.entry_kind(base)? {
            None => "does not exist",
            Some(EntryKind::File) => "is not a directory",
            Some(EntryKind::Directory) => {
                if !self.filesystem.is_read_only(base)? {
                    return Ok(());
                }
                "is read-only"
            }
        };
        Err(ApplicationError::InvalidBasePath {
            path: base.to_path_buf(),
            reason: reason.into(),
        }
        .into())
    }

    fn walk(
        &self,
        dir: &Path,
        children: &[TreeNode],
        mode: Mode,
        report: &mut CreationReport,
    ) -> ScaffoldResult<()> {
        for child in children {
            let path = dir.join(child.name());
            match child.kind() {
                NodeKind::File { content } => self.write_file(&path, content, mode, report)?,
                NodeKind::Directory { children } => {
                    self.ensure_dir(&path, mode, report)?;
                    self.walk(&path, children, mode, report)?;
                }
            }
        }
        Ok(())
    }

    fn ensure_dir(
        &self,
        path: &Path,
        mode: Mode,
        report: &mut CreationReport,
    ) -> ScaffoldResult<()> {
        match self.filesystem.entry_kind(path)? {
            Some(EntryKind::Directory) => {
                debug!(path = %path.display(), "Folder already exists");
                report.record_skipped(path, EntryKind::Directory);
            }
            Some(found) => {
                return Err(ApplicationError::PathKindConflict {
                    path: path.to_path_buf(),
                    expected: EntryKind::Directory,
                    found,
                }
                .into());
            }
            None => {
                if mode == Mode::Apply {
                    self.filesystem.create_dir(path)?;
                    info!("Created folder: {}", path.display());
                }
                report.record_created(path, EntryKind::Directory);
            }
        }
        Ok(())
    }

    fn write_file(
        &self,
        path: &Path,
        content: &str,
        mode: Mode,
        report: &mut CreationReport,
    ) -> ScaffoldResult<()> {
        match self.filesystem.entry_kind(path)? {
            Some(EntryKind::Directory) => {
                return Err(ApplicationError::PathKindConflict {
                    path: path.to_path_buf(),
                    expected: EntryKind::File,
                    found: EntryKind::Directory,
                }
                .into());
            }
            Some(EntryKind::File) if self.policy == OverwritePolicy::Preserve => {
                debug!(path = %path.display(), "File exists, preserving");
                report.record_skipped(path, EntryKind::File);
            }
            _ => {
                if mode == Mode::Apply {
                    self.filesystem.write_file(path, content)?;
                    info!("Created file: {}", path.display());
                }
                report.record_created(path, EntryKind::File);
            }
        }
        Ok(())
    }
}
