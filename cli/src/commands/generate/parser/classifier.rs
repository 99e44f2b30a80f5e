//! # Line Classifier
//!
//! File: cli/src/commands/generate/parser/classifier.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Decides, line by line, whether a markdown line describes a filesystem entry.
//! Only lines inside a fenced code block (```` ``` ````) are candidates. Inside a
//! fence a line is structural when it either
//!
//! - carries a tree connector (`├──` or `└──`), optionally preceded by `│`
//!   continuation glyphs and whitespace, followed by some content, or
//! - is an un-indented `name/` line made only of letters, digits and `._-`
//!   (the root folder of a diagram, drawn without glyphs).
//!
//! Everything else is skipped: blank lines, comments, headers, rules, XML/HTML,
//! URLs and `Label: text` prose. When in doubt the classifier skips; a missed
//! entry is cheaper than a bogus file on disk.
//!
//! The fence state is the only state kept between lines, so one classifier
//! must be used per document.
//!
use regex::Regex;
use std::sync::OnceLock;
use tracing::trace;

/// Verdict for one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// The line describes one file or directory.
    Structural,
    /// Noise, prose, a fence delimiter or anything outside a fence.
    Skip,
}

static CONNECTOR_LINE: OnceLock<Regex> = OnceLock::new();
static ROOT_FOLDER: OnceLock<Regex> = OnceLock::new();
static LABEL_PROSE: OnceLock<Regex> = OnceLock::new();

/// `│   ├── name` → captures `name` (everything after the connector). The
/// horizontal run may be longer than two glyphs (`├─── name`).
fn connector_line_regex() -> &'static Regex {
    CONNECTOR_LINE.get_or_init(|| {
        Regex::new(r"^[\s│]*[├└]─+(.*)$").expect("Invalid connector line regex")
    })
}

fn root_folder_regex() -> &'static Regex {
    ROOT_FOLDER.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9._-]*/$").expect("Invalid root folder regex")
    })
}

/// `Note: something`, `Usage: ...` and similar prose labels.
fn label_prose_regex() -> &'static Regex {
    LABEL_PROSE.get_or_init(|| Regex::new(r"^[A-Z][a-z]+:").expect("Invalid label regex"))
}

/// Returns the text following the first tree connector, if the line is a
/// connector line.
pub fn connector_remainder(line: &str) -> Option<&str> {
    connector_line_regex()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// True for an un-indented line that names a root folder (`app/`).
pub fn is_root_folder_line(line: &str) -> bool {
    !line.starts_with(' ') && !line.starts_with('\t') && root_folder_regex().is_match(line.trim())
}

/// Markdown, markup and prose that never names a filesystem entry.
fn is_noise(trimmed: &str) -> bool {
    const NOISE_PREFIXES: &[&str] = &["#", "//", "*", "<", "xmlns", "---", "Usage:", "Example:", "Note:"];
    const NOISE_FRAGMENTS: &[&str] = &["=\"", "://"];
    const NOISE_LINES: &[&str] = &["Project Structure", "File Contents"];

    NOISE_PREFIXES.iter().any(|p| trimmed.starts_with(p))
        || NOISE_FRAGMENTS.iter().any(|f| trimmed.contains(f))
        || NOISE_LINES.contains(&trimmed)
        || label_prose_regex().is_match(trimmed)
}

/// # Line Classifier (`LineClassifier`)
///
/// Stateful over a single document: tracks whether the current line sits
/// inside a fenced code block.
#[derive(Debug, Default)]
pub struct LineClassifier {
    in_code_block: bool,
}

impl LineClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the last classified line left the document inside a fence.
    pub fn in_code_block(&self) -> bool {
        self.in_code_block
    }

    /// # Classify (`classify`)
    ///
    /// Classifies one raw line. Fence delimiters toggle the fence state and are
    /// themselves skipped.
    pub fn classify(&mut self, line: &str) -> LineKind {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineKind::Skip;
        }
        if trimmed.starts_with("```") {
            self.in_code_block = !self.in_code_block;
            trace!("Fence toggled, inside code block: {}", self.in_code_block);
            return LineKind::Skip;
        }
        if !self.in_code_block || is_noise(trimmed) {
            return LineKind::Skip;
        }

        let has_content_after_connector =
            connector_remainder(line).is_some_and(|rest| !rest.trim().is_empty());
        if has_content_after_connector || is_root_folder_line(line) {
            trace!("Structural line: {:?}", line);
            LineKind::Structural
        } else {
            trace!("Skipping unrecognized line: {:?}", line);
            LineKind::Skip
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Classifies `lines` after opening a fence.
    fn classify_in_fence(lines: &[&str]) -> Vec<LineKind> {
        let mut classifier = LineClassifier::new();
        assert_eq!(classifier.classify("```"), LineKind::Skip);
        lines.iter().map(|l| classifier.classify(l)).collect()
    }

    #[test]
    fn test_lines_outside_fence_are_skipped() {
        let mut classifier = LineClassifier::new();
        assert_eq!(classifier.classify("├── src/"), LineKind::Skip);
        assert_eq!(classifier.classify("app/"), LineKind::Skip);
        assert!(!classifier.in_code_block());
    }

    #[test]
    fn test_fence_toggles() {
        let mut classifier = LineClassifier::new();
        classifier.classify("```text");
        assert!(classifier.in_code_block());
        assert_eq!(classifier.classify("├── a.txt"), LineKind::Structural);
        classifier.classify("```");
        assert!(!classifier.in_code_block());
        assert_eq!(classifier.classify("├── b.txt"), LineKind::Skip);
    }

    #[test]
    fn test_structural_lines() {
        let kinds = classify_in_fence(&[
            "app/",
            "├── src/",
            "│   └── Main.java",
            "│   │   ├── deep.txt",
            "    └── spaced.md",
            "\t├── tabbed.md",
        ]);
        assert!(kinds.iter().all(|k| *k == LineKind::Structural));
    }

    #[test]
    fn test_connector_without_content_is_skipped() {
        let kinds = classify_in_fence(&["├──", "└──   ", "│"]);
        assert!(kinds.iter().all(|k| *k == LineKind::Skip));
    }

    #[test]
    fn test_noise_lines_are_skipped() {
        let kinds = classify_in_fence(&[
            "",
            "   ",
            "# heading",
            "## Project layout",
            "// comment",
            "---",
            "* bullet",
            "<?xml version=\"1.0\"?>",
            "<project>",
            "<!-- comment -->",
            "xmlns:xsi=\"foo\"",
            "see https://example.com/tree",
            "Usage: run it",
            "Note: generated",
            "Label: some prose",
            "Project Structure",
            "File Contents",
        ]);
        assert!(kinds.iter().all(|k| *k == LineKind::Skip), "{:?}", kinds);
    }

    #[test]
    fn test_prose_and_indented_folders_are_skipped() {
        let kinds = classify_in_fence(&[
            "This is a description of the module",
            "  nested/",
            "folder",
            "has space/",
            "-bad/",
        ]);
        assert!(kinds.iter().all(|k| *k == LineKind::Skip), "{:?}", kinds);
    }

    #[test]
    fn test_connector_remainder() {
        assert_eq!(connector_remainder("│   ├── lib.rs"), Some(" lib.rs"));
        assert_eq!(connector_remainder("└──x"), Some("x"));
        assert_eq!(connector_remainder("text ├── x"), None);
        assert_eq!(connector_remainder("├─── win.txt"), Some(" win.txt"));
        assert_eq!(connector_remainder("│   └────── deep"), Some(" deep"));
        assert_eq!(connector_remainder("plain"), None);
    }
}
