//! # treeforge Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout treeforge. Errors are
//! split the same way the tool treats failures at runtime:
//!
//! - **Input errors** (`InputNotFound`, `InputRead`): the diagram file cannot be
//!   found or read. Fatal, the process exits non-zero.
//! - **Directory creation failures** (`DirectoryCreate`): fatal to the subtree
//!   being materialized and propagated to the caller.
//! - **File creation failures** (`FileCreate`): never propagated out of the
//!   materializer; they are logged and counted. The variant exists so the
//!   warning carries a uniform message.
//! - **Configuration and template errors** (`Config`, `Template`).
//!
//! Lines that fail name validation are *not* errors at all; the parser simply
//! drops them and counts them.
//!
//! ## Architecture
//!
//! - `ScaffoldError`: a `thiserror` enum naming each failure.
//! - `Result<T>`: alias for `anyhow::Result<T>` so call sites can attach context.
//!
//! ## Examples
//!
//! ```rust
//! if !input.exists() {
//!     anyhow::bail!(ScaffoldError::InputNotFound { path: input.to_path_buf() });
//! }
//!
//! let text = fs::read_to_string(&input)
//!     .map_err(|source| ScaffoldError::InputRead { path: input.clone(), source })?;
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the treeforge application.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Input file '{}' not found.", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Failed to read input file '{}': {source}", path.display())]
    InputRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create directory '{}': {source}", path.display())]
    DirectoryCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create file '{}': {source}", path.display())]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
