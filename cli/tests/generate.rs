//! # treeforge CLI Generate Integration Tests
//!
//! File: cli/tests/generate.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! End-to-end tests for the default `treeforge <INPUT> <OUTPUT>` command:
//! scaffolding, idempotence, dry runs, template toggles and input errors.
//!
mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_generate_app_scenario() {
    let work = tempdir().unwrap();
    fs::write(work.path().join("structure.md"), APP_DIAGRAM).unwrap();

    isolated_cmd(work.path())
        .args(["structure.md", "out"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Created directory: out/app/src")
                .and(predicate::str::contains("Created file: out/app/README.md"))
                .and(predicate::str::contains("Files created: 2"))
                .and(predicate::str::contains("Total items: 4")),
        );

    let out = work.path().join("out");
    assert_eq!(
        list_tree(&out),
        ["app/", "app/README.md", "app/src/", "app/src/Main.java"]
    );
    let main = fs::read_to_string(out.join("app/src/Main.java")).unwrap();
    assert!(main.contains("public class Main {"));
    let readme = fs::read_to_string(out.join("app/README.md")).unwrap();
    assert!(readme.starts_with("# README"));
}

#[test]
fn test_second_run_skips_existing_files() {
    let work = tempdir().unwrap();
    fs::write(work.path().join("structure.md"), APP_DIAGRAM).unwrap();
    isolated_cmd(work.path())
        .args(["structure.md", "out"])
        .assert()
        .success();

    let readme = work.path().join("out/app/README.md");
    fs::write(&readme, "edited by hand\n").unwrap();

    isolated_cmd(work.path())
        .args(["structure.md", "out"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Files created: 0")
                .and(predicate::str::contains("Files skipped: 2")),
        );
    assert_eq!(fs::read_to_string(readme).unwrap(), "edited by hand\n");
}

#[test]
fn test_dry_run_writes_nothing() {
    let work = tempdir().unwrap();
    fs::write(work.path().join("structure.md"), APP_DIAGRAM).unwrap();

    isolated_cmd(work.path())
        .args(["structure.md", "out", "--dry-run"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("└── app/")
                .and(predicate::str::contains("    │   └── Main.java"))
                .and(predicate::str::contains("Dry run")),
        );
    assert!(!work.path().join("out").exists());
}

#[test]
fn test_no_templates_creates_empty_files() {
    let work = tempdir().unwrap();
    fs::write(work.path().join("structure.md"), APP_DIAGRAM).unwrap();

    isolated_cmd(work.path())
        .args(["structure.md", "out", "--no-templates"])
        .assert()
        .success();
    let main = work.path().join("out/app/src/Main.java");
    assert_eq!(fs::read_to_string(main).unwrap(), "");
}

#[test]
fn test_project_config_template_directory() {
    let work = tempdir().unwrap();
    fs::create_dir(work.path().join("my-templates")).unwrap();
    fs::write(
        work.path().join("my-templates/md.tera"),
        "Custom {{ stem }}\n",
    )
    .unwrap();
    fs::write(
        work.path().join(".treeforge.toml"),
        format!(
            "[templates]\ndirectory = \"{}\"\n",
            work.path().join("my-templates").display()
        ),
    )
    .unwrap();
    fs::write(work.path().join("structure.md"), APP_DIAGRAM).unwrap();

    isolated_cmd(work.path())
        .args(["structure.md", "out"])
        .assert()
        .success();
    let readme = fs::read_to_string(work.path().join("out/app/README.md")).unwrap();
    assert_eq!(readme, "Custom README\n");
}

#[test]
fn test_package_inferred_under_java_root() {
    let work = tempdir().unwrap();
    let diagram = "```\nsvc/\n└── src/\n    └── main/\n        └── java/\n            └── com/\n                └── shop/\n                    ├── OrderService.java\n                    └── OrderNotFoundException.java\n```\n";
    fs::write(work.path().join("structure.md"), diagram).unwrap();

    isolated_cmd(work.path())
        .args(["structure.md", "out"])
        .assert()
        .success();
    let dir = work.path().join("out/svc/src/main/java/com/shop");
    let service = fs::read_to_string(dir.join("OrderService.java")).unwrap();
    assert!(service.starts_with("package com.shop;"));
    let exception = fs::read_to_string(dir.join("OrderNotFoundException.java")).unwrap();
    assert!(exception.contains("extends Exception"));
}

#[test]
fn test_prose_and_bad_names_create_nothing() {
    let work = tempdir().unwrap();
    let diagram = "Some intro text.\n\n```\napp/\nThis is a description of the module\n├── lib/\n│   └── core.js\n├── My Notes/\n└── what?.txt\n```\n";
    fs::write(work.path().join("structure.md"), diagram).unwrap();

    isolated_cmd(work.path())
        .args(["structure.md", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lines rejected: 2"));
    assert_eq!(
        list_tree(&work.path().join("out")),
        ["app/", "app/lib/", "app/lib/core.js"]
    );
}

#[test]
fn test_dotfile_without_extension_becomes_directory() {
    let work = tempdir().unwrap();
    fs::write(
        work.path().join("structure.md"),
        "```\nproj/\n├── .gitignore\n└── .env.local\n```\n",
    )
    .unwrap();

    isolated_cmd(work.path())
        .args(["structure.md", "out"])
        .assert()
        .success();
    let proj = work.path().join("out/proj");
    assert!(proj.join(".gitignore").is_dir());
    assert!(proj.join(".env.local").is_file());
}

#[test]
fn test_missing_input_file_fails() {
    let work = tempdir().unwrap();
    isolated_cmd(work.path())
        .args(["does-not-exist.md", "out"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does-not-exist.md"));
    assert!(!work.path().join("out").exists());
}

#[test]
fn test_input_without_fences_creates_only_output_dir() {
    let work = tempdir().unwrap();
    fs::write(work.path().join("plain.md"), "├── not-in-a-fence.txt\n").unwrap();

    isolated_cmd(work.path())
        .args(["plain.md", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No project tree found"));
    assert!(work.path().join("out").is_dir());
    assert!(list_tree(&work.path().join("out")).is_empty());
}

#[test]
fn test_directory_failure_exits_with_summary() {
    let work = tempdir().unwrap();
    fs::write(
        work.path().join("structure.md"),
        "```\n├── first.txt\n├── blocked/\n│   └── inner.txt\n└── later.txt\n```\n",
    )
    .unwrap();
    fs::create_dir(work.path().join("out")).unwrap();
    fs::write(work.path().join("out/blocked"), "a file in the way").unwrap();

    isolated_cmd(work.path())
        .args(["structure.md", "out"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Files created: 1"))
        .stderr(predicate::str::contains("blocked"));
    assert!(!work.path().join("out/later.txt").exists());
}
