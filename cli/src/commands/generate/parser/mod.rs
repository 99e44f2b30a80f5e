//! # Tree Diagram Parser
//!
//! File: cli/src/commands/generate/parser/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Turns a markdown document containing tree diagrams into a forest of
//! [`StructureNode`]s. Data flows one way through four stages:
//!
//! 1. `classifier`: structural line or skip (tracks ```` ``` ```` fences)
//! 2. `indent`: logical nesting level of a structural line
//! 3. `names`: sanitized entry name, or a rejection
//! 4. `builder`: stack-based reconstruction of the hierarchy
//!
//! Malformed lines never fail the parse. Structural lines whose name is
//! rejected are dropped and counted in [`ParseOutcome::rejected`].
//!
//! ## Example
//!
//! ```rust
//! let outcome = DiagramParser::new(50).parse("```\napp/\n└── README.md\n```\n");
//! assert_eq!(outcome.forest[0].name(), "app");
//! ```
//!
pub mod builder;
pub mod classifier;
pub mod indent;
pub mod names;

use crate::commands::generate::node::StructureNode;
use builder::TreeBuilder;
use classifier::{LineClassifier, LineKind};
use names::NameExtractor;
use tracing::{debug, warn};

/// Result of parsing one document.
#[derive(Debug, Default)]
pub struct ParseOutcome {
    /// Root-level nodes in source order.
    pub forest: Vec<StructureNode>,
    /// Lines classified as structural.
    pub structural_lines: usize,
    /// Structural lines dropped because their name failed validation.
    pub rejected: usize,
}

/// # Diagram Parser (`DiagramParser`)
///
/// Runs the classify → level → name → build pipeline over one document.
#[derive(Debug)]
pub struct DiagramParser {
    classifier: LineClassifier,
    extractor: NameExtractor,
}

impl DiagramParser {
    pub fn new(max_name_length: usize) -> Self {
        Self {
            classifier: LineClassifier::new(),
            extractor: NameExtractor::new(max_name_length),
        }
    }

    /// Parses `text`, consuming the parser so fence state never leaks into
    /// another document.
    pub fn parse(mut self, text: &str) -> ParseOutcome {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut builder = TreeBuilder::new();
        let mut structural_lines = 0;
        let mut rejected = 0;

        for (index, line) in text.lines().enumerate() {
            if self.classifier.classify(line) != LineKind::Structural {
                continue;
            }
            structural_lines += 1;
            match self.extractor.extract(line) {
                Some(name) => builder.push(name, indent::indent_level(line)),
                None => {
                    rejected += 1;
                    debug!("Line {}: dropped entry {:?}", index + 1, line.trim());
                }
            }
        }

        if self.classifier.in_code_block() {
            warn!("Input ended inside an unterminated code block.");
        }

        let forest = builder.finish();
        debug!(
            "Parsed {} structural lines into {} root entries ({} rejected)",
            structural_lines,
            forest.len(),
            rejected
        );
        ParseOutcome {
            forest,
            structural_lines,
            rejected,
        }
    }
}
