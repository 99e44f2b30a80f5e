//! # treeforge Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module groups the filesystem helpers shared by the commands.
//!
//! - **`io`**: directory creation (`ensure_dir_exists`), reading the input
//!   diagram (`read_file_to_string`) and create-if-absent file writes
//!   (`create_new_file`).
//!
//! Callers import from the submodule directly, e.g.
//! `use crate::common::fs::io::ensure_dir_exists;`.
//!

/// Contains basic file I/O operations (e.g., `ensure_dir_exists`, `read_file_to_string`, `create_new_file`).
pub mod io;
