pub mod report;
pub mod tree;

pub use report::{CreationReport, EntryKind, ReportEntry};
pub use tree::{NodeKind, ROOT_NAME, TreeNode, TreeStats};
