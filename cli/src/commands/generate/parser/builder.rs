//! # Tree Builder
//!
//! File: cli/src/commands/generate/parser/builder.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Rebuilds the hierarchy from a flat stream of `(name, level)` entries in a
//! single pass, using a stack of open directories.
//!
//! For each entry:
//! 1. Pop every open directory whose level is greater than or equal to the
//!    entry's level. Equal levels are siblings, never parent and child.
//! 2. Attach the entry to the directory left on top, or to the root list.
//! 3. If the entry is a directory, push it so deeper entries can join it.
//!
//! Open directories live *on the stack* and are attached to their parent when
//! popped. A directory is always popped before any later sibling arrives, so
//! children keep their source order without shared ownership.
//!
use crate::commands::generate::node::StructureNode;
use tracing::trace;

/// An open directory and the level it was introduced at.
#[derive(Debug)]
struct ParseFrame {
    node: StructureNode,
    level: usize,
}

/// # Tree Builder (`TreeBuilder`)
///
/// Accumulates entries via [`TreeBuilder::push`] and yields the forest from
/// [`TreeBuilder::finish`].
#[derive(Debug, Default)]
pub struct TreeBuilder {
    stack: Vec<ParseFrame>,
    roots: Vec<StructureNode>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one entry found at logical `level`.
    pub fn push(&mut self, name: String, level: usize) {
        while self.stack.last().is_some_and(|frame| frame.level >= level) {
            self.close_top();
        }

        let node = StructureNode::new(name);
        trace!(
            "Entry '{}' at level {} (directory: {}, depth: {})",
            node.name(),
            level,
            node.is_directory(),
            self.stack.len()
        );
        if node.is_directory() {
            self.stack.push(ParseFrame { node, level });
        } else {
            self.attach(node);
        }
    }

    /// Closes every open directory and returns the forest.
    pub fn finish(mut self) -> Vec<StructureNode> {
        while !self.stack.is_empty() {
            self.close_top();
        }
        self.roots
    }

    /// Pops the innermost open directory and hands it to its parent.
    fn close_top(&mut self) {
        if let Some(frame) = self.stack.pop() {
            self.attach(frame.node);
        }
    }

    fn attach(&mut self, node: StructureNode) {
        match self.stack.last_mut() {
            Some(parent) => parent.node.push_child(node),
            None => self.roots.push(node),
        }
    }
}
