//! # treeforge Generate Command
//!
//! File: cli/src/commands/generate/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The default command: `treeforge <INPUT> <OUTPUT>`. Reads a markdown file,
//! recovers the project tree drawn inside its code fences, and creates that
//! tree under the output directory with boilerplate content in each new file.
//!
//! ## Architecture
//!
//! - `node`: the `StructureNode` model
//! - `parser`: markdown lines → forest (classifier, indent, names, builder)
//! - `materializer`: forest → directories and files, with progress events
//!
//! The command flow:
//! 1. Load configuration (`core::config`)
//! 2. Read the input file; fail with a non-zero exit if it is missing or unreadable
//! 3. Parse the diagram into a forest
//! 4. With `--dry-run`, print the forest as a tree and stop
//! 5. Materialize the forest, printing one line per path
//! 6. Print a summary, even if a directory failure stopped the run early
//!
//! ## Examples
//!
//! ```bash
//! # Scaffold the tree described in structure.md into ./my-project
//! treeforge structure.md ./my-project
//!
//! # Preview what would be created
//! treeforge structure.md ./my-project --dry-run
//! ```
//!
pub mod materializer;
pub mod node;
pub mod parser;

use crate::commands::tree::printer;
use crate::common::fs::io;
use crate::core::config::{self, Config};
use crate::core::error::Result;
use crate::core::templating::{
    BuiltinTemplates, ContentTemplateProvider, EmptyTemplates, OverrideTemplates,
};
use anyhow::{anyhow, Context};
use clap::Args;
use materializer::{GenerationReport, Materializer, ProgressAction, ProgressEvent, ProgressSink};
use parser::{DiagramParser, ParseOutcome};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// # Generate Arguments (`GenerateArgs`)
///
/// Positional arguments of the top-level command. They are declared required
/// but become optional when a subcommand (`tree`, `stats`) is used instead.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Markdown file containing the project tree diagram.
    #[arg(required = true, value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Directory in which the tree is created (created if absent).
    #[arg(required = true, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Parse and print the recovered tree without touching the filesystem.
    #[arg(long)]
    dry_run: bool,

    /// Create every file empty instead of filling it from templates.
    #[arg(long)]
    no_templates: bool,
}

/// # Console Progress (`ConsoleProgress`)
///
/// Prints one line per materialization event, with paths relative to the
/// current directory when possible.
struct ConsoleProgress {
    cwd: Option<PathBuf>,
}

impl ConsoleProgress {
    fn new() -> Self {
        Self {
            cwd: env::current_dir().ok(),
        }
    }

    fn display_path(&self, path: &Path) -> String {
        self.cwd
            .as_deref()
            .and_then(|cwd| pathdiff::diff_paths(path, cwd))
            .unwrap_or_else(|| path.to_path_buf())
            .display()
            .to_string()
    }
}

impl ProgressSink for ConsoleProgress {
    fn record(&mut self, event: &ProgressEvent) {
        let shown = self.display_path(&event.path);
        match event.action {
            ProgressAction::DirectoryCreated => println!("📂 Created directory: {}", shown),
            ProgressAction::DirectoryExisted => println!("📂 Directory exists: {}", shown),
            ProgressAction::FileCreated => println!("📄 Created file: {}", shown),
            ProgressAction::FileSkipped => println!("⏭️  Skipped existing file: {}", shown),
            ProgressAction::FileFailed => println!("⚠️  Could not create file: {}", shown),
        }
    }
}

/// # Handle Generate (`handle_generate`)
///
/// Runs the full read → parse → materialize flow for the given arguments.
///
/// ## Returns
///
/// * `Result<()>` - `Err` for input errors and directory creation failures;
///   file creation failures only show up in the summary.
pub fn handle_generate(args: GenerateArgs) -> Result<()> {
    let input = args
        .input
        .ok_or_else(|| anyhow!("Missing <INPUT> argument"))?;
    let output = args
        .output
        .ok_or_else(|| anyhow!("Missing <OUTPUT> argument"))?;
    info!(
        "Generating structure from '{}' into '{}'",
        input.display(),
        output.display()
    );

    let cfg = config::load_config().context("Failed to load treeforge configuration")?;
    let text = io::read_file_to_string(&input)?;
    let outcome = DiagramParser::new(cfg.generate.max_name_length).parse(&text);

    if outcome.forest.is_empty() {
        warn!("No tree entries found in '{}'", input.display());
        println!(
            "No project tree found in '{}'. Tree diagrams must sit inside ``` code fences.",
            input.display()
        );
    }

    if args.dry_run {
        print!("{}", printer::render_forest(&outcome.forest));
        println!();
        println!("Dry run: nothing was written to '{}'.", output.display());
        print_parse_summary(&outcome);
        return Ok(());
    }

    let templates = build_template_provider(&cfg, args.no_templates);
    let mut progress = ConsoleProgress::new();
    let mut materializer = Materializer::new(templates.as_ref(), &mut progress);
    let result = materializer.materialize(&outcome.forest, &output);
    let report = materializer.report();

    print_summary(&report, &outcome);
    result.context("Project structure generation stopped early")?;
    println!("✅ Project structure generated in: {}", output.display());
    Ok(())
}

/// Picks the content provider matching the configuration and flags.
fn build_template_provider(cfg: &Config, no_templates: bool) -> Box<dyn ContentTemplateProvider> {
    if no_templates || !cfg.templates.enabled {
        debug!("Templates disabled; files will be created empty.");
        return Box::new(EmptyTemplates);
    }
    let builtin = BuiltinTemplates::new(cfg.generate.source_root_marker.clone());
    match &cfg.templates.directory {
        Some(dir) if Path::new(dir).is_dir() => {
            debug!("Using template overrides from '{}'", dir);
            Box::new(OverrideTemplates::new(dir, builtin))
        }
        _ => Box::new(builtin),
    }
}

fn print_parse_summary(outcome: &ParseOutcome) {
    println!("  Structural lines: {}", outcome.structural_lines);
    println!("  Lines rejected: {}", outcome.rejected);
    println!("  Total items: {}", node::count_nodes(&outcome.forest));
}

fn print_summary(report: &GenerationReport, outcome: &ParseOutcome) {
    println!();
    println!("Project structure generation summary:");
    println!(
        "  Directories created: {} ({} already present)",
        report.directories_created, report.directories_existing
    );
    println!("  Files created: {}", report.files_created);
    println!("  Files skipped: {} (already present)", report.files_skipped);
    println!("  Files failed: {}", report.files_failed);
    print_parse_summary(outcome);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::TemplatesConfig;
    use clap::Parser;
    use tempfile::tempdir;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        args: GenerateArgs,
    }

    #[test]
    fn test_parses_positionals_and_flags() {
        let cli = TestCli::try_parse_from(["treeforge", "tree.md", "out", "--dry-run"]).unwrap();
        assert_eq!(cli.args.input, Some(PathBuf::from("tree.md")));
        assert_eq!(cli.args.output, Some(PathBuf::from("out")));
        assert!(cli.args.dry_run);
        assert!(!cli.args.no_templates);
    }

    #[test]
    fn test_missing_output_is_rejected() {
        assert!(TestCli::try_parse_from(["treeforge", "tree.md"]).is_err());
    }

    #[test]
    fn test_console_progress_relative_paths() {
        let progress = ConsoleProgress {
            cwd: Some(PathBuf::from("/work")),
        };
        assert_eq!(progress.display_path(Path::new("/work/out/app")), "out/app");
        let no_cwd = ConsoleProgress { cwd: None };
        assert_eq!(no_cwd.display_path(Path::new("/work/out")), "/work/out");
    }

    #[test]
    fn test_provider_selection() -> Result<()> {
        let path = Path::new("pom.xml");

        let cfg = Config::default();
        assert!(build_template_provider(&cfg, false)
            .content_for("pom.xml", path)?
            .contains("<project"));
        assert_eq!(build_template_provider(&cfg, true).content_for("pom.xml", path)?, "");

        let disabled = Config {
            templates: TemplatesConfig {
                enabled: false,
                directory: None,
            },
            ..Default::default()
        };
        assert_eq!(build_template_provider(&disabled, false).content_for("pom.xml", path)?, "");

        let dir = tempdir()?;
        std::fs::write(dir.path().join("xml.tera"), "custom {{ file_name }}")?;
        let overridden = Config {
            templates: TemplatesConfig {
                enabled: true,
                directory: Some(dir.path().to_string_lossy().to_string()),
            },
            ..Default::default()
        };
        // The exact-name builtin for pom.xml loses to a user override by extension.
        assert_eq!(
            build_template_provider(&overridden, false).content_for("pom.xml", path)?,
            "custom pom.xml"
        );
        Ok(())
    }
}
