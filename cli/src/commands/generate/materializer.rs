//! # Structure Materializer
//!
//! File: cli/src/commands/generate/materializer.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Writes a parsed forest to disk under a base directory. Directories are
//! created as needed; files are created only when nothing exists at their path
//! and are filled by a [`ContentTemplateProvider`].
//!
//! ## Behavior
//!
//! - **Idempotent**: existing directories count as success and existing files
//!   are never touched, so running twice against the same target is safe.
//! - **Directory failures are fatal** to their subtree: the error is returned
//!   immediately and nothing else is attempted. Work already done stays.
//! - **File failures are not**: they are logged as warnings, counted, and the
//!   walk moves on to the next sibling.
//! - Every directory or file visited produces exactly one [`ProgressEvent`]
//!   for the [`ProgressSink`]. Events are observational only.
//!
//! The running [`GenerationReport`] stays readable after an error, so callers
//! can still tell the user what was created.
//!
//! ## Example
//!
//! ```rust
//! let templates = BuiltinTemplates::new("java");
//! let mut sink = ConsoleProgress::new();
//! let mut materializer = Materializer::new(&templates, &mut sink);
//! materializer.materialize(&outcome.forest, Path::new("./out"))?;
//! println!("{} files created", materializer.report().files_created);
//! ```
//!
use crate::commands::generate::node::StructureNode;
use crate::common::fs::io;
use crate::core::error::{Result, ScaffoldError};
use crate::core::templating::ContentTemplateProvider;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// What happened to one path during materialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressAction {
    DirectoryCreated,
    DirectoryExisted,
    FileCreated,
    FileSkipped,
    FileFailed,
}

/// One observable step of the materialization walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEvent {
    pub path: PathBuf,
    pub action: ProgressAction,
}

/// Receives progress events as the walk proceeds.
pub trait ProgressSink {
    fn record(&mut self, event: &ProgressEvent);
}

/// Collects events in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<ProgressEvent>,
}

#[cfg(test)]
impl ProgressSink for RecordingSink {
    fn record(&mut self, event: &ProgressEvent) {
        self.events.push(event.clone());
    }
}

/// Counts of what a materialization run did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerationReport {
    pub directories_created: usize,
    pub directories_existing: usize,
    pub files_created: usize,
    pub files_skipped: usize,
    pub files_failed: usize,
}

/// # Materializer (`Materializer`)
///
/// Walks a forest and realizes it on disk.
pub struct Materializer<'a> {
    templates: &'a dyn ContentTemplateProvider,
    sink: &'a mut dyn ProgressSink,
    report: GenerationReport,
}

impl<'a> Materializer<'a> {
    pub fn new(templates: &'a dyn ContentTemplateProvider, sink: &'a mut dyn ProgressSink) -> Self {
        Self {
            templates,
            sink,
            report: GenerationReport::default(),
        }
    }

    /// Counts accumulated so far (complete after a successful run).
    pub fn report(&self) -> GenerationReport {
        self.report
    }

    /// # Materialize (`materialize`)
    ///
    /// Creates `base_path` if absent, then realizes `forest` beneath it in
    /// declared order.
    ///
    /// ## Errors
    ///
    /// Returns an error if `base_path` or any directory in the forest cannot be
    /// created. File creation failures are not errors.
    pub fn materialize(&mut self, forest: &[StructureNode], base_path: &Path) -> Result<()> {
        io::ensure_dir_exists(base_path)
            .with_context(|| format!("Failed to prepare output directory '{}'", base_path.display()))?;
        info!(
            "Materializing {} root entries into '{}'",
            forest.len(),
            base_path.display()
        );
        self.materialize_level(forest, base_path)
    }

    fn materialize_level(&mut self, nodes: &[StructureNode], parent: &Path) -> Result<()> {
        for node in nodes {
            let path = parent.join(node.name());
            if node.is_directory() {
                self.create_directory(&path)?;
                self.materialize_level(node.children(), &path)?;
            } else {
                self.create_file(node.name(), &path);
            }
        }
        Ok(())
    }

    fn create_directory(&mut self, path: &Path) -> Result<()> {
        if path.is_dir() {
            debug!("Directory already exists: {}", path.display());
            self.report.directories_existing += 1;
            self.emit(path, ProgressAction::DirectoryExisted);
            return Ok(());
        }
        fs::create_dir_all(path).map_err(|source| ScaffoldError::DirectoryCreate {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Created directory: {}", path.display());
        self.report.directories_created += 1;
        self.emit(path, ProgressAction::DirectoryCreated);
        Ok(())
    }

    fn create_file(&mut self, file_name: &str, path: &Path) {
        if path.exists() {
            debug!("File already exists, skipping: {}", path.display());
            self.report.files_skipped += 1;
            self.emit(path, ProgressAction::FileSkipped);
            return;
        }

        let content = match self.templates.content_for(file_name, path) {
            Ok(content) => content,
            Err(e) => {
                warn!(
                    "Could not generate content for {}: {:#}. Creating it empty.",
                    path.display(),
                    e
                );
                String::new()
            }
        };

        match io::create_new_file(path, &content) {
            Ok(true) => {
                info!("Created file: {} ({} bytes)", path.display(), content.len());
                self.report.files_created += 1;
                self.emit(path, ProgressAction::FileCreated);
            }
            Ok(false) => {
                self.report.files_skipped += 1;
                self.emit(path, ProgressAction::FileSkipped);
            }
            Err(e) => {
                warn!("Warning: {:#}", e);
                self.report.files_failed += 1;
                self.emit(path, ProgressAction::FileFailed);
            }
        }
    }

    fn emit(&mut self, path: &Path, action: ProgressAction) {
        self.sink.record(&ProgressEvent {
            path: path.to_path_buf(),
            action,
        });
    }
}
