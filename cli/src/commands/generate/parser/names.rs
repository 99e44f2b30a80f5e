//! # Name Extractor
//!
//! File: cli/src/commands/generate/parser/names.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Pulls the entry name out of a structural line and sanitizes it. The
//! validator is the last gate between a diagram and the filesystem, so it is
//! strict: anything that is not a plain, short file name is refused.
//!
//! ## Extraction
//!
//! - Connector lines (`│   ├── name/  # comment`): take the text after the
//!   connector, cut it at the first `#`, trim it, drop one trailing `/`.
//! - Root folder lines (`app/`): the trimmed line without its trailing `/`.
//!
//! ## Validation
//!
//! A candidate is rejected when it
//! - contains any of `: " < > | ? * =` or a space,
//! - is longer than the configured limit (50 characters by default),
//! - reads like a word of prose (`Overview`, `Description`: a capital followed
//!   only by lowercase letters), unless it is a conventional file name such
//!   as `Dockerfile` or `Makefile`,
//!
//! and is otherwise accepted only if it matches the conservative alphabet
//! `[A-Za-z0-9][A-Za-z0-9._-]*`, optionally behind one leading `.` for dotfiles.
//!
use super::classifier::{connector_remainder, is_root_folder_line};
use crate::commands::generate::node::KNOWN_FILE_NAMES;
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Characters never accepted in a name.
const ILLEGAL_CHARS: &[char] = &[':', '"', '<', '>', '|', '?', '*', '='];

static NAME_ALPHABET: OnceLock<Regex> = OnceLock::new();
static PROSE_WORD: OnceLock<Regex> = OnceLock::new();

fn name_alphabet_regex() -> &'static Regex {
    NAME_ALPHABET.get_or_init(|| {
        Regex::new(r"^\.?[a-zA-Z0-9][a-zA-Z0-9._-]*$").expect("Invalid name alphabet regex")
    })
}

fn prose_word_regex() -> &'static Regex {
    PROSE_WORD.get_or_init(|| Regex::new(r"^[A-Z][a-z]+$").expect("Invalid prose word regex"))
}

/// # Name Extractor (`NameExtractor`)
///
/// Extracts and validates entry names, with a configurable length limit.
#[derive(Debug, Clone)]
pub struct NameExtractor {
    max_name_length: usize,
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new(50)
    }
}

impl NameExtractor {
    pub fn new(max_name_length: usize) -> Self {
        Self { max_name_length }
    }

    /// # Extract (`extract`)
    ///
    /// Returns the sanitized name of a structural line, or `None` if the line
    /// carries no acceptable name.
    pub fn extract(&self, line: &str) -> Option<String> {
        let candidate = if let Some(rest) = connector_remainder(line) {
            let without_comment = match rest.find('#') {
                Some(idx) => &rest[..idx],
                None => rest,
            };
            strip_trailing_slash(without_comment.trim())
        } else if is_root_folder_line(line) {
            strip_trailing_slash(line.trim())
        } else {
            return None;
        };
        self.validate_and_clean(candidate)
    }

    /// # Validate and Clean (`validate_and_clean`)
    ///
    /// Trims `name` and returns it if it passes every rule in the module docs.
    pub fn validate_and_clean(&self, name: &str) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        if name.contains(ILLEGAL_CHARS) || name.contains(' ') {
            debug!("Rejected name with illegal characters: {:?}", name);
            return None;
        }
        if name.chars().count() > self.max_name_length {
            debug!("Rejected name longer than {}: {:?}", self.max_name_length, name);
            return None;
        }
        if prose_word_regex().is_match(name) && !KNOWN_FILE_NAMES.contains(&name) {
            debug!("Rejected prose-like name: {:?}", name);
            return None;
        }
        if name_alphabet_regex().is_match(name) {
            Some(name.to_string())
        } else {
            debug!("Rejected name outside the filename alphabet: {:?}", name);
            None
        }
    }
}

/// Drops a single trailing `/`, but never reduces the name to nothing.
fn strip_trailing_slash(name: &str) -> &str {
    match name.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => name,
    }
}
