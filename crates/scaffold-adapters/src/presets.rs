//! Built-in descriptors shipped with the binary.

use std::fmt;

use scaffold_core::{domain::TreeNode, error::ScaffoldResult};

use crate::descriptor_loader::{DescriptorFormat, parse_with_origin};

/// A descriptor compiled into the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Layout of a small hobby operating-system project.
    MyOs,
}

impl Preset {
    pub const ALL: &'static [Preset] = &[Preset::MyOs];

    pub fn name(self) -> &'static str {
        match self {
            Self::MyOs => "myos",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::MyOs => "Hobby OS project: boot, kernel, userspace, tools, docs and tests",
        }
    }

    /// Raw descriptor text.
    pub fn source(self) -> &'static str {
        match self {
            Self::MyOs => include_str!("../descriptors/myos.json"),
        }
    }

    /// Look a preset up by its [`name`](Self::name), ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// Parse and validate the embedded descriptor.
    pub fn load(self) -> ScaffoldResult<TreeNode> {
        let origin = format!("preset '{}'", self.name());
        parse_with_origin(self.source(), DescriptorFormat::Json, &origin)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_loads() {
        for preset in Preset::ALL {
            let tree = preset.load().unwrap();
            assert!(tree.stats().total() > 0, "{preset} is empty");
        }
    }

    #[test]
    fn myos_layout() {
        let tree = Preset::MyOs.load().unwrap();
        let myos = tree.child("MyOS").expect("top-level MyOS folder");

        let names: Vec<&str> = myos.children().iter().map(TreeNode::name).collect();
        for expected in ["boot", "kernel", "userspace", "tools", "docs", "tests", "Makefile"] {
            assert!(names.contains(&expected), "missing {expected} in {names:?}");
        }
        assert!(myos.child("kernel").unwrap().is_directory());
        assert!(!myos.child("Makefile").unwrap().is_directory());
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(Preset::from_name("myos"), Some(Preset::MyOs));
        assert_eq!(Preset::from_name("MyOS"), Some(Preset::MyOs));
        assert_eq!(Preset::from_name("linux"), None);
    }
}
