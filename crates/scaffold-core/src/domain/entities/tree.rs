//! The declared tree: what to create, in which order.

use std::fmt;

/// Name carried by the implicit top-level container.
///
/// The root stands for the base path itself, so its name never reaches disk.
pub const ROOT_NAME: &str = ".";

/// One filesystem entry to create.
///
/// A tree is built once from a descriptor and is never mutated during a
/// walk. Children keep their declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    name: String,
    kind: NodeKind,
}

/// File or directory, decided when the descriptor is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    File { content: String },
    Directory { children: Vec<TreeNode> },
}

impl TreeNode {
    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File {
                content: content.into(),
            },
        }
    }

    pub fn directory(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory { children },
        }
    }

    /// The top-level container whose children are created directly under
    /// the base path.
    pub fn root(children: Vec<TreeNode>) -> Self {
        Self::directory(ROOT_NAME, children)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    /// Children of a directory; empty for files.
    pub fn children(&self) -> &[TreeNode] {
        match &self.kind {
            NodeKind::Directory { children } => children,
            NodeKind::File { .. } => &[],
        }
    }

    /// Content of a file; `None` for directories.
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { content } => Some(content),
            NodeKind::Directory { .. } => None,
        }
    }

    /// Look up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.children().iter().find(|c| c.name == name)
    }

    /// Count files and directories below this node (the node itself is not
    /// counted).
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        for child in self.children() {
            match child.kind {
                NodeKind::File { .. } => stats.files += 1,
                NodeKind::Directory { .. } => {
                    stats.directories += 1;
                    stats += child.stats();
                }
            }
        }
        stats
    }
}

/// Entry counts of a tree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    pub files: usize,
    pub directories: usize,
}

impl TreeStats {
    pub fn total(&self) -> usize {
        self.files + self.directories
    }
}

impl std::ops::AddAssign for TreeStats {
    fn add_assign(&mut self, rhs: Self) {
        self.files += rhs.files;
        self.directories += rhs.directories;
    }
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} folders, {} files", self.directories, self.files)
    }
}
