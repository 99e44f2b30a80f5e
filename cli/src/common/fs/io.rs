//! # treeforge Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module centralizes the small set of filesystem primitives treeforge
//! needs, wrapped with consistent error context:
//!
//! - **`ensure_dir_exists`**: `mkdir -p` that also rejects a path occupied by a file.
//! - **`read_file_to_string`**: reads the input diagram, mapping "not found" and
//!   other read failures onto the input error variants.
//! - **`create_new_file`**: creates a file only if nothing exists at the path,
//!   and reports whether it did. Existing files are never truncated, which is
//!   what makes repeated generation runs safe.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! io::ensure_dir_exists(Path::new("./out"))?;
//! let diagram = io::read_file_to_string(Path::new("tree.md"))?;
//! if io::create_new_file(Path::new("./out/README.md"), "# README\n")? {
//!     println!("created");
//! }
//! ```
//!
use crate::core::error::{Result, ScaffoldError};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, this function creates the directory, including
/// any necessary parent directories (similar to `mkdir -p`). If the path already
/// exists but is not a directory, an error is returned.
///
/// # Errors
///
/// Returns `ScaffoldError::FileSystem` if the path exists but is not a
/// directory, or `ScaffoldError::DirectoryCreate` if creation fails.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|source| ScaffoldError::DirectoryCreate {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(ScaffoldError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
///
/// # Errors
///
/// Returns `ScaffoldError::InputNotFound` if nothing exists at `path`, and
/// `ScaffoldError::InputRead` for every other failure (permissions, a
/// directory instead of a file, invalid UTF-8).
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            ScaffoldError::InputNotFound {
                path: path.to_path_buf(),
            }
            .into()
        } else {
            ScaffoldError::InputRead {
                path: path.to_path_buf(),
                source,
            }
            .into()
        }
    })
}

/// Creates a new file with `content`, unless something already exists at `path`.
///
/// The existence check and the creation are a single `create_new` open, so a
/// file appearing between the two is left untouched too.
///
/// # Returns
///
/// * `Ok(true)` if the file was created, `Ok(false)` if the path was already taken.
///
/// # Errors
///
/// Returns `ScaffoldError::FileCreate` if opening or writing fails.
pub fn create_new_file(path: &Path, content: &str) -> Result<bool> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!("File already exists, leaving untouched: {:?}", path);
            return Ok(false);
        }
        Err(source) => {
            return Err(ScaffoldError::FileCreate {
                path: path.to_path_buf(),
                source,
            }
            .into())
        }
    };
    if !content.is_empty() {
        file.write_all(content.as_bytes())
            .map_err(|source| ScaffoldError::FileCreate {
                path: path.to_path_buf(),
                source,
            })?;
    }
    Ok(true)
}
