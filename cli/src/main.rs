//! # treeforge Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Entry point of the `treeforge` CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the generator or to a subcommand
//!
//! ## Architecture
//!
//! The default invocation takes two positionals and scaffolds a project:
//! `treeforge <INPUT> <OUTPUT>`. Helper tools are subcommands (`tree`,
//! `stats`); using one lifts the requirement for the positionals.
//! All errors are propagated to this level for consistent handling.
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! treeforge --help
//!
//! # Scaffold with increased verbosity
//! treeforge -vv structure.md ./my-project
//!
//! # Print an existing project as a diagram
//! treeforge tree ./my-project --fenced
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to the appropriate handler
//! 4. Format and display any errors that occur (exit code 1)
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // generate, tree, stats
mod common; // shared filesystem helpers
mod core; // errors, config, templating

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "treeforge",
    about = "🌳 treeforge: scaffold project structures from markdown tree diagrams",
    long_about = "Reads the tree diagrams drawn inside ``` code fences of a markdown file\n\
                  and creates the directories and files they describe, filling new files\n\
                  with boilerplate content.",
    propagate_version = true,
    subcommand_negates_reqs = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[command(flatten)]
    generate: commands::generate::GenerateArgs,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Helper subcommands.
#[derive(Parser, Debug)]
enum Commands {
    /// Print a directory in the diagram format treeforge reads.
    Tree(commands::tree::TreeArgs),
    /// Count folders, files and source lines under a directory.
    Stats(commands::stats::StatsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Some(Commands::Tree(args)) => commands::tree::handle_tree(args),
        Some(Commands::Stats(args)) => commands::stats::handle_stats(args),
        None => commands::generate::handle_generate(cli.generate),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
