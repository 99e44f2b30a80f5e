//! # treeforge Template System
//!
//! File: cli/src/core/templating.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module supplies the boilerplate text written into files created by the
//! generator. The materializer never knows what a `pom.xml` or a JUnit test
//! looks like; it asks a [`ContentTemplateProvider`] for the content of each
//! new file and writes whatever comes back (nothing, if the answer is empty).
//!
//! ## Architecture
//!
//! Three providers implement the trait:
//!
//! - [`BuiltinTemplates`]: a fixed table keyed by exact file name (`pom.xml`,
//!   `build.gradle`) and then by suffix (`.java`, `.xml`, `.md`, ...). Each entry
//!   is a Tera template rendered with the file's context. Unknown suffixes
//!   produce empty content.
//! - [`OverrideTemplates`]: looks for `<dir>/<file_name>.tera`, then
//!   `<dir>/<ext>.tera`, and renders that instead; falls back to the builtins.
//! - [`EmptyTemplates`]: always empty (`--no-templates`).
//!
//! Template context variables:
//! - `file_name`: the full file name (`UserService.java`)
//! - `stem`: the name without its last extension (`UserService`)
//! - `class_name`: same as `stem`, for Java-flavoured templates
//! - `package_declaration`: `package com.example;\n\n` or empty
//!
//! Java package inference walks the file's ancestors upward until it meets a
//! directory named after the configured source-root marker (`java` by default)
//! and joins the directory names in between with dots.
//!
//! ## Example
//!
//! ```rust
//! let provider = BuiltinTemplates::new("java");
//! let text = provider.content_for("Main.java", Path::new("out/app/src/Main.java"))?;
//! assert!(text.contains("public class Main"));
//! ```
//!
use crate::core::error::{Result, ScaffoldError};
use anyhow::{anyhow, Context};
use std::fs;
use std::path::{Path, PathBuf};
use tera::Tera;
use tracing::{debug, trace};

/// Supplies the initial content of a newly created file.
pub trait ContentTemplateProvider {
    /// Returns the text to write into `file_name` (located at `path`), or an
    /// empty string if the file should stay empty.
    fn content_for(&self, file_name: &str, path: &Path) -> Result<String>;
}

// --- Builtin Template Texts ---

const POM_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0
         http://maven.apache.org/xsd/maven-4.0.0.xsd">
    <modelVersion>4.0.0</modelVersion>

    <groupId>com.example</groupId>
    <artifactId>my-project</artifactId>
    <version>1.0-SNAPSHOT</version>

    <properties>
        <maven.compiler.source>11</maven.compiler.source>
        <maven.compiler.target>11</maven.compiler.target>
        <project.build.sourceEncoding>UTF-8</project.build.sourceEncoding>
    </properties>

    <dependencies>
        <!-- TODO: Add dependencies -->
    </dependencies>
</project>
"#;

const BUILD_GRADLE: &str = r#"plugins {
    id 'java'
}

group 'com.example'
version '1.0-SNAPSHOT'

java {
    sourceCompatibility = JavaVersion.VERSION_11
    targetCompatibility = JavaVersion.VERSION_11
}

repositories {
    mavenCentral()
}

dependencies {
    // TODO: Add dependencies
}

test {
    useJUnitPlatform()
}
"#;

const JAVA_TEST: &str = r#"{{ package_declaration }}import org.junit.jupiter.api.Test;
import static org.junit.jupiter.api.Assertions.*;

public class {{ class_name }} {

    @Test
    public void testExample() {
        // TODO: Implement test
        assertTrue(true);
    }
}
"#;

const JAVA_EXCEPTION: &str = r#"{{ package_declaration }}public class {{ class_name }} extends Exception {

    public {{ class_name }}(String message) {
        super(message);
    }

    public {{ class_name }}(String message, Throwable cause) {
        super(message, cause);
    }
}
"#;

const JAVA_INTERFACE: &str = r#"{{ package_declaration }}public interface {{ class_name }} {
    // TODO: Define interface methods
}
"#;

const JAVA_CLASS: &str = r#"{{ package_declaration }}public class {{ class_name }} {

    public {{ class_name }}() {
        // TODO: Implement constructor
    }

    // TODO: Add methods
}
"#;

const XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!-- TODO: Add XML content -->\n";
const PROPERTIES: &str = "# Configuration properties\n# TODO: Add properties\n";
const MARKDOWN: &str = "# {{ stem }}\n\nTODO: Add documentation\n";
const GITIGNORE: &str = "# IDE files\n.idea/\n*.iml\n\n# Build files\ntarget/\nbuild/\nout/\n\n# OS files\n.DS_Store\nThumbs.db\n\n# Logs\n*.log\n";
const YAML: &str = "# YAML configuration\n# TODO: Add configuration\n";
const JSON: &str = "{\n  \"TODO\": \"Add JSON content\"\n}\n";
const CSS: &str = "/* CSS Styles */\n/* TODO: Add styles */\n";
const JAVASCRIPT: &str = "// JavaScript\n// TODO: Add JavaScript code\n";
const SQL: &str = "-- SQL Script\n-- TODO: Add SQL statements\n";

const HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ stem }}</title>
</head>
<body>
    <h1>{{ stem }}</h1>
    <!-- TODO: Add content -->
</body>
</html>
"#;

/// Exact file names checked before any suffix rule.
const NAMED_TEMPLATES: &[(&str, &str)] = &[("pom.xml", POM_XML), ("build.gradle", BUILD_GRADLE)];

/// Suffix rules, first match wins. `.java` is handled separately.
const SUFFIX_TEMPLATES: &[(&str, &str)] = &[
    (".xml", XML),
    (".properties", PROPERTIES),
    (".md", MARKDOWN),
    (".gitignore", GITIGNORE),
    (".yml", YAML),
    (".yaml", YAML),
    (".json", JSON),
    (".html", HTML),
    (".css", CSS),
    (".js", JAVASCRIPT),
    (".sql", SQL),
];

/// Which flavour of Java source a class name calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JavaKind {
    Test,
    Exception,
    Interface,
    Class,
}

impl JavaKind {
    /// Picks the Java flavour from the class name's conventions.
    pub fn from_class_name(class_name: &str) -> Self {
        if class_name.ends_with("Test") {
            JavaKind::Test
        } else if class_name.ends_with("Exception") {
            JavaKind::Exception
        } else if class_name.ends_with("Interface") || class_name.starts_with('I') {
            JavaKind::Interface
        } else {
            JavaKind::Class
        }
    }

    fn template(self) -> &'static str {
        match self {
            JavaKind::Test => JAVA_TEST,
            JavaKind::Exception => JAVA_EXCEPTION,
            JavaKind::Interface => JAVA_INTERFACE,
            JavaKind::Class => JAVA_CLASS,
        }
    }
}

/// Returns the name without its last extension (`a.b.c` → `a.b`).
fn file_stem(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => &file_name[..idx],
        _ => file_name,
    }
}

/// # Infer Java Package (`package_declaration`)
///
/// Walks the ancestors of `path` upward, collecting directory names until a
/// directory named `marker` is found. Returns `package a.b.c;` plus a blank
/// line when the marker exists and at least one directory sits below it;
/// otherwise an empty string.
pub fn package_declaration(path: &Path, marker: &str) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut found_marker = false;

    for ancestor in path.ancestors().skip(1) {
        let Some(dir_name) = ancestor.file_name() else {
            break;
        };
        let dir_name = dir_name.to_string_lossy();
        if dir_name == marker {
            found_marker = true;
            break;
        }
        parts.push(dir_name.into_owned());
    }

    if !found_marker || parts.is_empty() {
        return String::new();
    }
    parts.reverse();
    format!("package {};\n\n", parts.join("."))
}

/// Builds the Tera context shared by builtin and override templates.
fn build_context(file_name: &str, path: &Path, marker: &str) -> tera::Context {
    let stem = file_stem(file_name);
    let mut context = tera::Context::new();
    context.insert("file_name", file_name);
    context.insert("stem", stem);
    context.insert("class_name", stem);
    let package = if file_name.ends_with(".java") {
        package_declaration(path, marker)
    } else {
        String::new()
    };
    context.insert("package_declaration", &package);
    context
}

fn render(template: &str, context: &tera::Context, path: &Path) -> Result<String> {
    Tera::one_off(template, context, false).map_err(|e| {
        anyhow!(ScaffoldError::Template { source: e })
            .context(format!("Rendering content for '{}' failed", path.display()))
    })
}

/// # Builtin Templates (`BuiltinTemplates`)
///
/// The fixed template table shipped with treeforge.
#[derive(Debug, Clone)]
pub struct BuiltinTemplates {
    source_root_marker: String,
}

impl BuiltinTemplates {
    pub fn new(source_root_marker: impl Into<String>) -> Self {
        Self {
            source_root_marker: source_root_marker.into(),
        }
    }

    /// Returns the raw template text for a file name, if any rule matches.
    fn template_for(file_name: &str) -> Option<&'static str> {
        if let Some((_, text)) = NAMED_TEMPLATES.iter().find(|(name, _)| *name == file_name) {
            return Some(text);
        }
        if file_name.ends_with(".java") {
            return Some(JavaKind::from_class_name(file_stem(file_name)).template());
        }
        SUFFIX_TEMPLATES
            .iter()
            .find(|(suffix, _)| file_name.ends_with(suffix))
            .map(|(_, text)| *text)
    }
}

impl ContentTemplateProvider for BuiltinTemplates {
    fn content_for(&self, file_name: &str, path: &Path) -> Result<String> {
        let Some(template) = Self::template_for(file_name) else {
            trace!("No builtin template for '{}'", file_name);
            return Ok(String::new());
        };
        let context = build_context(file_name, path, &self.source_root_marker);
        render(template, &context, path)
    }
}

/// # Override Templates (`OverrideTemplates`)
///
/// User-supplied `.tera` files taking precedence over the builtins.
#[derive(Debug, Clone)]
pub struct OverrideTemplates {
    directory: PathBuf,
    fallback: BuiltinTemplates,
}

impl OverrideTemplates {
    pub fn new(directory: impl Into<PathBuf>, fallback: BuiltinTemplates) -> Self {
        Self {
            directory: directory.into(),
            fallback,
        }
    }

    fn find_override(&self, file_name: &str) -> Option<PathBuf> {
        let exact = self.directory.join(format!("{}.tera", file_name));
        if exact.is_file() {
            return Some(exact);
        }
        let idx = file_name.rfind('.')?;
        let ext = &file_name[idx + 1..];
        if ext.is_empty() {
            return None;
        }
        let by_ext = self.directory.join(format!("{}.tera", ext));
        by_ext.is_file().then_some(by_ext)
    }
}

impl ContentTemplateProvider for OverrideTemplates {
    fn content_for(&self, file_name: &str, path: &Path) -> Result<String> {
        match self.find_override(file_name) {
            Some(template_path) => {
                debug!(
                    "Using override template '{}' for '{}'",
                    template_path.display(),
                    file_name
                );
                let template = fs::read_to_string(&template_path).with_context(|| {
                    format!("Failed to read template file '{}'", template_path.display())
                })?;
                let context =
                    build_context(file_name, path, &self.fallback.source_root_marker);
                render(&template, &context, path)
            }
            None => self.fallback.content_for(file_name, path),
        }
    }
}

/// Provider that leaves every file empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyTemplates;

impl ContentTemplateProvider for EmptyTemplates {
    fn content_for(&self, _file_name: &str, _path: &Path) -> Result<String> {
        Ok(String::new())
    }
}
