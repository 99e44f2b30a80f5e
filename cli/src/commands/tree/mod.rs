//! # treeforge Tree Command
//!
//! File: cli/src/commands/tree/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `treeforge tree <DIR>` prints an existing directory in the diagram format
//! `treeforge` reads. With `--fenced` the output is wrapped in a ```` ``` ````
//! block, ready to be saved as a markdown file and scaffolded elsewhere.
//!
//! ## Examples
//!
//! ```bash
//! treeforge tree ./my-project
//! treeforge tree ./my-project --fenced > structure.md
//! ```
//!
pub mod printer;

use crate::core::error::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Arguments for `treeforge tree`.
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Directory to print.
    dir: PathBuf,

    /// Wrap the output in a markdown code fence.
    #[arg(long)]
    fenced: bool,

    /// Name shown on the root line (defaults to the directory's own name).
    #[arg(long)]
    name: Option<String>,
}

/// # Handle Tree (`handle_tree`)
///
/// Prints the directory tree described by `args`.
///
/// ## Returns
///
/// * `Result<()>` - `Err` if the directory is missing or unreadable.
pub fn handle_tree(args: TreeArgs) -> Result<()> {
    info!("Printing tree for '{}'", args.dir.display());
    let rendered = render(&args)?;
    print!("{}", rendered);
    Ok(())
}

fn render(args: &TreeArgs) -> Result<String> {
    let display_name = match &args.name {
        Some(name) => name.clone(),
        None => root_display_name(&args.dir),
    };
    let tree = printer::print_directory_tree_to_string(&args.dir, &display_name)?;
    Ok(if args.fenced {
        format!("```\n{}```\n", tree)
    } else {
        tree
    })
}

/// The last component of `dir`, resolving `.` and similar through the canonical path.
fn root_display_name(dir: &std::path::Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .or_else(|| {
            dir.canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        })
        .unwrap_or_else(|| dir.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_render_fenced_with_name() -> Result<()> {
        let temp_dir = tempdir()?;
        fs::write(temp_dir.path().join("README.md"), "")?;
        let args = TreeArgs {
            dir: temp_dir.path().to_path_buf(),
            fenced: true,
            name: Some("demo".to_string()),
        };
        assert_eq!(render(&args)?, "```\ndemo/\n└── README.md\n```\n");
        Ok(())
    }

    #[test]
    fn test_root_display_name() {
        assert_eq!(root_display_name(std::path::Path::new("/work/app")), "app");
        assert!(!root_display_name(std::path::Path::new(".")).is_empty());
    }
}
