//! # treeforge Stats Command
//!
//! File: cli/src/commands/stats/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `treeforge stats <DIR>` walks a directory and reports how many folders and
//! files it holds and how many lines the tracked source files contain. It is
//! meant as a quick check of a freshly scaffolded project.
//!
//! ## Architecture
//!
//! - `walkdir` drives the traversal; subtrees named in `stats.skip_dirs` are
//!   pruned with `filter_entry`, so they are never descended into
//! - Only files whose name ends with one of `stats.extensions` have their
//!   lines counted; every other file is still counted as scanned
//! - Unreadable entries are logged and skipped; they never abort the scan
//!
//! The counters live in the returned [`ScanSummary`], so scans never share state.
//!
use crate::core::config::{self, StatsConfig};
use crate::core::error::Result;
use anyhow::{bail, Context};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// Arguments for `treeforge stats`.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Directory to scan.
    dir: PathBuf,
}

/// Totals collected by [`scan_directory`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Directories visited, including the root.
    pub folders: usize,
    /// Regular files seen.
    pub files: usize,
    /// Lines in files with a tracked extension.
    pub lines: usize,
}

/// # Handle Stats (`handle_stats`)
///
/// Loads configuration, scans `args.dir` and prints the summary.
pub fn handle_stats(args: StatsArgs) -> Result<()> {
    let cfg = config::load_config().context("Failed to load treeforge configuration")?;
    let summary = scan_directory(&args.dir, &cfg.stats)?;

    println!("📊 Scan summary for {}:", args.dir.display());
    println!("  Folders scanned: {}", summary.folders);
    println!("  Files scanned: {}", summary.files);
    println!("  Total lines of code: {}", summary.lines);
    Ok(())
}

/// # Scan Directory (`scan_directory`)
///
/// Walks `root` and counts folders, files and tracked lines.
///
/// ## Arguments
///
/// * `root` - Directory to scan. The root itself is never skipped, even if
///   its name is listed in `skip_dirs`.
/// * `stats` - Skip list and tracked extensions.
///
/// ## Returns
///
/// * `Result<ScanSummary>` - The totals, or an error if `root` is not a directory.
pub fn scan_directory(root: &Path, stats: &StatsConfig) -> Result<ScanSummary> {
    if !root.is_dir() {
        bail!("Cannot scan '{}': not an existing directory.", root.display());
    }
    info!("Scanning '{}'", root.display());

    let mut summary = ScanSummary::default();
    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| !is_skipped_dir(entry, &stats.skip_dirs));

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                warn!("Failed to access entry during scan of '{}': {}", root.display(), e);
                continue;
            }
        };

        if entry.file_type().is_dir() {
            summary.folders += 1;
        } else if entry.file_type().is_file() {
            summary.files += 1;
            if is_tracked(entry.path(), &stats.extensions) {
                summary.lines += count_lines(entry.path());
            }
        }
    }

    debug!("Scan of '{}' finished: {:?}", root.display(), summary);
    Ok(summary)
}

fn is_skipped_dir(entry: &DirEntry, skip_dirs: &[String]) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && skip_dirs
            .iter()
            .any(|skip| entry.file_name().to_string_lossy() == skip.as_str())
}

fn is_tracked(path: &Path, extensions: &[String]) -> bool {
    let name = match path.file_name() {
        Some(n) => n.to_string_lossy(),
        None => return false,
    };
    extensions.iter().any(|ext| name.ends_with(ext.as_str()))
}

/// Lines in `path`; unreadable files count as zero.
fn count_lines(path: &Path) -> usize {
    match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).lines().count(),
        Err(e) => {
            warn!("Could not read '{}': {}. Counting 0 lines.", path.display(), e);
            0
        }
    }
}
