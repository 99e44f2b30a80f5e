//! # treeforge Tree Printer
//!
//! File: cli/src/commands/tree/printer.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Draws trees with the same box-drawing connectors the parser reads
//! (`├── `, `└── `, `│   `), so printed output can be pasted into a markdown
//! code fence and fed back to `treeforge`.
//!
//! Two sources are supported:
//!
//! - A parsed forest ([`render_forest`]), used by `--dry-run`
//! - A directory on disk ([`print_directory_tree_to_string`]), used by `treeforge tree`
//!
//! Directory names always carry a trailing `/`. Unlike the parser, the disk
//! walker knows the real entry type, and the slash keeps that visible.
//!
//! ## Architecture
//!
//! - Entries of a directory are sorted directories first, then by name
//! - Symlink cycles are detected through canonical paths and marked instead of followed
//! - Hidden entries are listed, since dotfiles are part of a scaffold
//!
//! Example output:
//!
//! ```text
//! book-service/
//! ├── src/
//! │   └── Main.java
//! └── pom.xml
//! ```
//!
use crate::commands::generate::node::StructureNode;
use crate::core::error::Result;
use anyhow::{bail, Context};
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

/// Connector for intermediate items in a listing.
const TEE: &str = "├── ";
/// Connector for the last item in a listing.
const ELBOW: &str = "└── ";
/// Continuation of an ancestor that still has siblings below.
const PIPE: &str = "│   ";
/// Indentation under an ancestor that was the last item.
const SPACER: &str = "    ";

/// One entry read from disk.
struct DirEntry {
    path: PathBuf,
    name: String,
    is_dir: bool,
}

/// Appends `prefix + connector + name` and returns the prefix for the entry's children.
fn write_entry(output: &mut String, prefix: &str, is_last: bool, name: &str, is_dir: bool) -> String {
    let connector = if is_last { ELBOW } else { TEE };
    output.push_str(prefix);
    output.push_str(connector);
    output.push_str(name);
    if is_dir {
        output.push('/');
    }
    output.push('\n');
    let continuation = if is_last { SPACER } else { PIPE };
    format!("{}{}", prefix, continuation)
}

/// # Render Forest (`render_forest`)
///
/// Renders a parsed forest. Every root gets a connector, so a forest with
/// several roots (or root-level files) still parses back to the same shape.
///
/// ## Arguments
///
/// * `forest` - Root nodes in source order.
///
/// ## Returns
///
/// * `String` - The tree, one entry per line; empty for an empty forest.
pub fn render_forest(forest: &[StructureNode]) -> String {
    let mut output = String::new();
    render_nodes(forest, "", &mut output);
    output
}

fn render_nodes(nodes: &[StructureNode], prefix: &str, output: &mut String) {
    let count = nodes.len();
    for (index, node) in nodes.iter().enumerate() {
        let is_last = index + 1 == count;
        let child_prefix = write_entry(output, prefix, is_last, node.name(), node.is_directory());
        if node.is_directory() {
            render_nodes(node.children(), &child_prefix, output);
        }
    }
}

/// # Generate Directory Tree String (`print_directory_tree_to_string`)
///
/// Walks `root_path` and renders its contents under a `display_name/` root line.
///
/// ## Arguments
///
/// * `root_path` - Directory to walk.
/// * `display_name` - Name printed on the root line.
///
/// ## Returns
///
/// * `Result<String>` - The rendered tree, or an error if `root_path` is not
///   a readable directory.
pub fn print_directory_tree_to_string(root_path: &Path, display_name: &str) -> Result<String> {
    if !root_path.exists() {
        bail!(
            "Cannot print tree: Path '{}' does not exist.",
            root_path.display()
        );
    }
    if !root_path.is_dir() {
        bail!(
            "Cannot print tree: Path '{}' is not a directory.",
            root_path.display()
        );
    }

    let mut visited = HashSet::new();
    match root_path.canonicalize() {
        Ok(canonical_root) => {
            visited.insert(canonical_root);
        }
        Err(e) => warn!(
            "Could not canonicalize root path '{}': {}. Cycle detection might be affected.",
            root_path.display(),
            e
        ),
    }

    let mut output = String::new();
    output.push_str(display_name);
    output.push_str("/\n");
    walk_and_build_string(root_path, "", &mut visited, &mut output)
        .context("Failed while generating directory tree structure string")?;
    Ok(output)
}

fn walk_and_build_string(
    dir: &Path,
    prefix: &str,
    visited: &mut HashSet<PathBuf>,
    output: &mut String,
) -> Result<()> {
    let entries = read_and_sort_dir_entries(dir)?;
    let count = entries.len();

    for (index, entry) in entries.into_iter().enumerate() {
        let is_last = index + 1 == count;
        let child_prefix = write_entry(output, prefix, is_last, &entry.name, entry.is_dir);
        if !entry.is_dir {
            continue;
        }

        match entry.path.canonicalize() {
            Ok(canonical) if visited.contains(&canonical) => {
                warn!(
                    "Detected symlink cycle for '{}'. Skipping subtree.",
                    entry.path.display()
                );
                output.push_str(&format!("{}{}-> [CYCLE DETECTED]\n", child_prefix, ELBOW));
            }
            Ok(canonical) => {
                // `visited` holds only the current ancestor chain.
                visited.insert(canonical.clone());
                let walked = walk_and_build_string(&entry.path, &child_prefix, visited, output);
                visited.remove(&canonical);
                walked?;
            }
            Err(e) => {
                warn!(
                    "Could not canonicalize path '{}': {}. Skipping cycle check.",
                    entry.path.display(),
                    e
                );
                walk_and_build_string(&entry.path, &child_prefix, visited, output)?;
            }
        }
    }
    Ok(())
}

/// Reads `dir`, sorted directories first and then by name.
fn read_and_sort_dir_entries(dir: &Path) -> Result<Vec<DirEntry>> {
    let mut collected = Vec::new();
    let read_dir_iter = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory entries from '{}'", dir.display()))?;

    for entry_result in read_dir_iter {
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                warn!(
                    "Failed to process directory entry in '{}': {}. Skipping.",
                    dir.display(),
                    e
                );
                continue;
            }
        };
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();
        // `fs::metadata` follows symlinks, so a link to a directory is listed as one.
        let is_dir = match fs::metadata(&path) {
            Ok(md) => md.is_dir(),
            Err(e) => {
                debug!("Could not get metadata for '{}': {}", path.display(), e);
                false
            }
        };
        collected.push(DirEntry { path, name, is_dir });
    }

    collected.sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name)));
    Ok(collected)
}
