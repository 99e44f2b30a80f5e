//! # Indent Resolver
//!
//! File: cli/src/commands/generate/parser/indent.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Maps the leading run of a line (spaces, tabs and tree glyphs) to a logical
//! nesting level. Each space weighs 1, each tab 4, and each glyph (`│ ├ └ ─`)
//! 2; the sum is halved. Glyph-drawn lines and space-indented lines end up on
//! one comparable integer scale:
//!
//! ```text
//! app/               -> 0
//! ├── src/           -> (3 glyphs * 2 + 1 space) / 2 = 3
//! │   └── Main.java  -> (2 + 3 + 6 + 1) / 2 = 6
//! ```
//!
//! The level only has to grow with visual nesting; its absolute value carries
//! no meaning.
//!

const SPACE_WEIGHT: usize = 1;
const TAB_WEIGHT: usize = 4;
const GLYPH_WEIGHT: usize = 2;

/// Computes the logical indent level of `line`. Pure; independent of other lines.
pub fn indent_level(line: &str) -> usize {
    let mut score = 0;
    for c in line.chars() {
        score += match c {
            ' ' => SPACE_WEIGHT,
            '\t' => TAB_WEIGHT,
            '│' | '├' | '└' | '─' => GLYPH_WEIGHT,
            _ => break,
        };
    }
    score / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unindented_is_zero() {
        assert_eq!(indent_level("app/"), 0);
        assert_eq!(indent_level(""), 0);
    }

    #[test]
    fn test_weights() {
        assert_eq!(indent_level("  x"), 1);
        assert_eq!(indent_level("\tx"), 2);
        assert_eq!(indent_level("├── x"), 3);
        assert_eq!(indent_level("│   └── x"), 6);
        assert_eq!(indent_level("    └── x"), 5);
    }

    #[test]
    fn test_monotonic_with_nesting() {
        let lines = ["a/", "  ├── b/", "    └── c.txt"];
        let levels: Vec<usize> = lines.iter().map(|l| indent_level(l)).collect();
        assert!(levels.windows(2).all(|w| w[0] < w[1]), "{:?}", levels);
    }

    #[test]
    fn test_stops_at_content() {
        // Spaces inside the name do not count.
        assert_eq!(indent_level("├── a b c"), 3);
    }
}
