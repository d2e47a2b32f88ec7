use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{
    entities::{NodeKind, TreeNode},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities. It runs
/// before any filesystem call.
pub struct DomainValidator;

impl DomainValidator {
    /// Validate a whole tree: the root is a directory, every name is usable
    /// as a single path segment, and siblings never share a name.
    pub fn validate_tree(root: &TreeNode) -> Result<(), DomainError> {
        if !root.is_directory() {
            return Err(DomainError::RootNotDirectory {
                name: root.name().to_string(),
            });
        }
        Self::validate_children(Path::new(""), root.children())
    }

    /// Check that `name` is a single, ordinary path segment.
    pub fn validate_name(name: &str) -> Result<(), DomainError> {
        let reason = if name.is_empty() {
            Some("name cannot be empty")
        } else if name == "." || name == ".." {
            Some("'.' and '..' are reserved")
        } else if name.contains('/') || name.contains('\\') {
            Some("name cannot contain path separators")
        } else if name.contains('\0') {
            Some("name cannot contain NUL")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(DomainError::InvalidName {
                name: name.to_string(),
                reason,
            }),
            None => Ok(()),
        }
    }

    fn validate_children(parent: &Path, children: &[TreeNode]) -> Result<(), DomainError> {
        let mut seen = HashSet::with_capacity(children.len());
        for child in children {
            Self::validate_name(child.name())?;
            if !seen.insert(child.name()) {
                return Err(DomainError::DuplicateName {
                    parent: describe_parent(parent),
                    name: child.name().to_string(),
                });
            }
            if let NodeKind::Directory { children } = child.kind() {
                let path: PathBuf = parent.join(child.name());
                Self::validate_children(&path, children)?;
            }
        }
        Ok(())
    }
}

fn describe_parent(parent: &Path) -> String {
    if parent.as_os_str().is_empty() {
        "the top level".to_string()
    } else {
        format!("'{}'", parent.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_tree() {
        let root = TreeNode::root(vec![TreeNode::directory(
            "A",
            vec![TreeNode::file("x.txt", "hi"), TreeNode::directory("B", vec![])],
        )]);
        assert!(DomainValidator::validate_tree(&root).is_ok());
    }

    #[test]
    fn same_name_in_different_folders_is_fine() {
        let root = TreeNode::root(vec![
            TreeNode::directory("a", vec![TreeNode::file("x", "")]),
            TreeNode::directory("b", vec![TreeNode::file("x", "")]),
        ]);
        assert!(DomainValidator::validate_tree(&root).is_ok());
    }

    #[test]
    fn rejects_duplicate_siblings_even_of_different_kinds() {
        let root = TreeNode::root(vec![TreeNode::directory(
            "A",
            vec![
                TreeNode::directory("B", vec![]),
                TreeNode::file("B", "clash"),
            ],
        )]);
        let err = DomainValidator::validate_tree(&root).unwrap_err();
        assert_eq!(
            err,
            DomainError::DuplicateName {
                parent: "'A'".into(),
                name: "B".into(),
            }
        );
    }

    #[test]
    fn duplicate_at_top_level_is_described() {
        let root = TreeNode::root(vec![TreeNode::file("x", ""), TreeNode::file("x", "")]);
        let err = DomainValidator::validate_tree(&root).unwrap_err();
        assert!(err.to_string().contains("the top level"), "{err}");
    }

    #[test]
    fn rejects_file_root() {
        let err = DomainValidator::validate_tree(&TreeNode::file("x", "")).unwrap_err();
        assert!(matches!(err, DomainError::RootNotDirectory { .. }));
    }

    #[test]
    fn rejects_bad_names_deep_in_the_tree() {
        let root = TreeNode::root(vec![TreeNode::directory(
            "A",
            vec![TreeNode::directory("B", vec![TreeNode::file("../escape", "")])],
        )]);
        assert!(matches!(
            DomainValidator::validate_tree(&root),
            Err(DomainError::InvalidName { .. })
        ));
    }

    #[test]
    fn name_rules() {
        for bad in ["", ".", "..", "a/b", "a\\b", "nul\0"] {
            assert!(DomainValidator::validate_name(bad).is_err(), "accepted {bad:?}");
        }
        for good in ["kernel", "vfs.c", ".gitignore", "cross-compiler", "..."] {
            assert!(DomainValidator::validate_name(good).is_ok(), "rejected {good:?}");
        }
    }
}
