//! Scaffold Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the `scaffold`
//! tool: a declared tree of folders and files is validated, then materialized
//! under a base path through a [`Filesystem`](application::ports::Filesystem)
//! port.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          scaffold-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │              (Scaffolder)               │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │           (Driven: Filesystem)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    scaffold-adapters (Infrastructure)   │
//! │ (LocalFilesystem, MemoryFilesystem, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │     (TreeNode, CreationReport, ...)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use scaffold_core::prelude::*;
//!
//! let root = TreeNode::root(vec![TreeNode::directory(
//!     "A",
//!     vec![TreeNode::file("x.txt", "hi"), TreeNode::directory("B", vec![])],
//! )]);
//!
//! // `filesystem` is any `Box<dyn Filesystem>` adapter.
//! # let filesystem: Box<dyn Filesystem> = unimplemented!();
//! let scaffolder = Scaffolder::new(filesystem);
//! let report = scaffolder.materialize("/tmp/t", &root).unwrap();
//! assert_eq!(report.len(), 3);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{OverwritePolicy, Scaffolder, ports::Filesystem};
    pub use crate::domain::{CreationReport, EntryKind, NodeKind, ReportEntry, TreeNode};
    pub use crate::error::{Aborted, ScaffoldError, ScaffoldResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
