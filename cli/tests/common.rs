//! # treeforge CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! is compiled as its own crate and pulls this module in with `mod common;`.
//!

// Not every test file uses every helper.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// # Get treeforge Command (`treeforge_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `treeforge` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn treeforge_cmd() -> Command {
    Command::cargo_bin("treeforge").expect("Failed to find treeforge binary for testing")
}

/// # Isolated Command (`isolated_cmd`)
///
/// A `treeforge` command running in `workdir`, with the user configuration
/// directory redirected there too, so no real configuration leaks into a test.
pub fn isolated_cmd(workdir: &Path) -> Command {
    let mut cmd = treeforge_cmd();
    cmd.current_dir(workdir)
        .env("HOME", workdir)
        .env("XDG_CONFIG_HOME", workdir.join(".config"))
        .env_remove("TREEFORGE_TEMPLATES_DIR")
        .env_remove("RUST_LOG");
    cmd
}

/// Relative paths of everything under `root`, directories suffixed with `/`, sorted.
pub fn list_tree(root: &Path) -> Vec<String> {
    let mut entries: Vec<String> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| {
            let rel: PathBuf = e.path().strip_prefix(root).unwrap().to_path_buf();
            let rel = rel.to_string_lossy().replace('\\', "/");
            if e.file_type().is_dir() {
                format!("{}/", rel)
            } else {
                rel
            }
        })
        .collect();
    entries.sort();
    entries
}

/// The diagram used across the integration tests.
pub const APP_DIAGRAM: &str = "\
# My App

Project layout:

```
app/
├── src/
│   └── Main.java
└── README.md
```
";
