//! # Structure Node
//!
//! File: cli/src/commands/generate/node.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The in-memory model of a parsed tree diagram. Each [`StructureNode`] is one
//! file or directory; directories own their children in source-line order. A
//! parsed diagram is a *forest*: the ordered list of root-level nodes.
//!
//! Nodes are created by the parser and consumed by the materializer and the
//! tree printer. Nothing is persisted; the generated filesystem is the result.
//!

/// Conventional extensionless file names. They are files despite having no
/// extension, and are exempt from the prose-word rejection.
pub const KNOWN_FILE_NAMES: &[&str] = &[
    "Dockerfile",
    "Containerfile",
    "Makefile",
    "Jenkinsfile",
    "Procfile",
    "Gemfile",
    "Rakefile",
    "Vagrantfile",
];

/// # Is Directory Name (`is_directory_name`)
///
/// A name denotes a file only if its last `.` sits after the first character
/// and before the last one (`README.md`, `a.b`), or if it is one of
/// [`KNOWN_FILE_NAMES`]. Everything else is a directory name, including
/// dotfiles without a second dot (`.env`, `.gitignore`) and names ending in a
/// dot (`weird.`).
pub fn is_directory_name(name: &str) -> bool {
    if KNOWN_FILE_NAMES.contains(&name) {
        return false;
    }
    match name.rfind('.') {
        Some(idx) => idx == 0 || idx == name.len() - 1,
        None => true,
    }
}

/// One file or directory recovered from a tree diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureNode {
    name: String,
    is_directory: bool,
    children: Vec<StructureNode>,
}

impl StructureNode {
    /// Creates a childless node, classifying it from its name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let is_directory = is_directory_name(&name);
        Self {
            name,
            is_directory,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_directory(&self) -> bool {
        self.is_directory
    }

    pub fn children(&self) -> &[StructureNode] {
        &self.children
    }

    /// Appends a child, keeping insertion order.
    ///
    /// Only directories take children; the parser never attaches to a file.
    pub fn push_child(&mut self, child: StructureNode) {
        debug_assert!(self.is_directory, "files cannot own children");
        self.children.push(child);
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + count_nodes(&self.children)
    }
}

/// Total number of nodes in a forest.
pub fn count_nodes(forest: &[StructureNode]) -> usize {
    forest.iter().map(StructureNode::count).sum()
}
