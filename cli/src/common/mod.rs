//! # treeforge Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared utility modules used by the command handlers, kept apart from
//! command-specific logic (`commands::`) and core infrastructure (`core::`).
//!
//! - **`fs`**: foundational filesystem operations (directory creation, reading
//!   input files, create-if-absent writes).
//!

/// Utilities for filesystem operations.
pub mod fs;
