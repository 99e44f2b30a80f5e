//! # treeforge Configuration
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module loads, merges and validates treeforge's configuration. Settings
//! control the generator's heuristics (Java source-root marker, maximum accepted
//! name length), the template system (enabled flag, override directory) and the
//! `stats` scanner (skipped directories, counted extensions).
//!
//! ## Architecture
//!
//! Configuration comes from two optional TOML files:
//!
//! 1. **User config**: `<platform config dir>/treeforge/config.toml`
//! 2. **Project config**: `.treeforge.toml`, searched from the current directory
//!    upward and stopping at the first directory that contains `.git`
//!
//! Project values win over user values whenever they differ from the built-in
//! defaults. After merging, the `TREEFORGE_TEMPLATES_DIR` environment variable
//! (if set) replaces the template directory, paths are tilde-expanded, and the
//! result is validated.
//!
//! ## Example
//!
//! ```toml
//! [generate]
//! source_root_marker = "java"
//! max_name_length = 50
//!
//! [templates]
//! enabled = true
//! directory = "~/treeforge/templates"
//!
//! [stats]
//! skip_dirs = ["target", "node_modules"]
//! extensions = [".java", ".md"]
//! ```
//!
use crate::core::error::{Result, ScaffoldError};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Environment variable that overrides `templates.directory`.
pub const TEMPLATES_DIR_ENV: &str = "TREEFORGE_TEMPLATES_DIR";

const PROJECT_CONFIG_FILENAME: &str = ".treeforge.toml";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub generate: GenerateConfig,
    #[serde(default)]
    pub templates: TemplatesConfig,
    #[serde(default)]
    pub stats: StatsConfig,
}

/// Settings for diagram parsing and materialization.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GenerateConfig {
    /// Directory name that anchors Java package inference (e.g. `src/main/java`).
    #[serde(default = "default_source_root_marker")]
    pub source_root_marker: String,
    /// Names longer than this (in characters) are rejected as implausible.
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
}

/// Settings for the boilerplate content of generated files.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TemplatesConfig {
    /// When false, every generated file is created empty.
    #[serde(default = "default_templates_enabled")]
    pub enabled: bool,
    /// Optional directory of `.tera` files overriding the builtin templates (can use ~).
    #[serde(default)]
    pub directory: Option<String>,
}

/// Settings for the `stats` line counter.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StatsConfig {
    /// Directory names whose whole subtree is skipped.
    #[serde(default = "default_skip_dirs")]
    pub skip_dirs: Vec<String>,
    /// File name suffixes whose lines are counted.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            source_root_marker: default_source_root_marker(),
            max_name_length: default_max_name_length(),
        }
    }
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            enabled: default_templates_enabled(),
            directory: None,
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            skip_dirs: default_skip_dirs(),
            extensions: default_extensions(),
        }
    }
}

fn default_source_root_marker() -> String {
    "java".to_string()
}
fn default_max_name_length() -> usize {
    50
}
fn default_templates_enabled() -> bool {
    true
}
fn default_skip_dirs() -> Vec<String> {
    vec!["target".to_string()]
}
fn default_extensions() -> Vec<String> {
    [
        ".java",
        ".kt",
        ".xml",
        ".gradle",
        ".properties",
        ".gitignore",
        ".md",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// # Load Configuration (`load_config`)
///
/// Loads the user and project configuration files (both optional), merges them,
/// applies the environment override, expands `~` and validates the result.
///
/// ## Returns
///
/// * `Result<Config>` - The effective configuration, or an error if a file could
///   not be read/parsed or the merged values are invalid.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    apply_env_overrides(&mut merged_config);
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "TreeForge", "treeforge") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.treeforge.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let defaults = Config::default();
    let mut merged = Config::default();

    merged.generate.source_root_marker =
        if project_cfg.generate.source_root_marker != defaults.generate.source_root_marker {
            project_cfg.generate.source_root_marker
        } else {
            user.generate.source_root_marker
        };
    merged.generate.max_name_length =
        if project_cfg.generate.max_name_length != defaults.generate.max_name_length {
            project_cfg.generate.max_name_length
        } else {
            user.generate.max_name_length
        };
    merged.templates.enabled = if project_cfg.templates.enabled != defaults.templates.enabled {
        project_cfg.templates.enabled
    } else {
        user.templates.enabled
    };
    merged.templates.directory = project_cfg.templates.directory.or(user.templates.directory);
    merged.stats.skip_dirs = if project_cfg.stats.skip_dirs != defaults.stats.skip_dirs {
        project_cfg.stats.skip_dirs
    } else {
        user.stats.skip_dirs
    };
    merged.stats.extensions = if project_cfg.stats.extensions != defaults.stats.extensions {
        project_cfg.stats.extensions
    } else {
        user.stats.extensions
    };
    merged
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(dir) = env::var(TEMPLATES_DIR_ENV) {
        if !dir.trim().is_empty() {
            debug!("Template directory overridden by {}: {}", TEMPLATES_DIR_ENV, dir);
            config.templates.directory = Some(dir);
        }
    }
}

fn expand_config_paths(config: &mut Config) {
    if let Some(dir) = config.templates.directory.as_mut() {
        *dir = shellexpand::tilde(dir.as_str()).into_owned();
        debug!("Expanded template directory: {}", dir);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    let marker = &config.generate.source_root_marker;
    if marker.trim().is_empty() || marker.contains('/') || marker.contains('\\') {
        return Err(anyhow!(ScaffoldError::Config(format!(
            "source_root_marker must be a single directory name, got '{}'.",
            marker
        ))));
    }
    if config.generate.max_name_length == 0 {
        return Err(anyhow!(ScaffoldError::Config(
            "max_name_length must be greater than zero.".to_string()
        )));
    }
    if let Some(dir) = &config.templates.directory {
        let dir_path = PathBuf::from(dir);
        if !dir_path.exists() {
            warn!(
                "Configured template directory '{}' does not exist; using builtin templates.",
                dir_path.display()
            );
        } else if !dir_path.is_dir() {
            return Err(anyhow!(ScaffoldError::Config(format!(
                "Configured template path '{}' exists but is not a directory.",
                dir_path.display()
            ))));
        }
    }
    for ext in &config.stats.extensions {
        if !ext.starts_with('.') {
            return Err(anyhow!(ScaffoldError::Config(format!(
                "Invalid stats extension '{}'. Extensions must start with '.'.",
                ext
            ))));
        }
    }
    debug!("Configuration validation successful.");
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [generate]
            source_root_marker = "kotlin"

            [templates]
            enabled = false
            directory = "~/my_templates"

            [stats]
            skip_dirs = ["target", "node_modules"]
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.generate.source_root_marker, "kotlin");
        assert_eq!(config.generate.max_name_length, 50); // Default
        assert!(!config.templates.enabled);
        assert_eq!(config.templates.directory.as_deref(), Some("~/my_templates"));
        assert_eq!(config.stats.skip_dirs, vec!["target", "node_modules"]);
        assert_eq!(config.stats.extensions, default_extensions()); // Default
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[generate]\nbogus = 1\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_prefers_non_default_project_values() {
        let user = Config {
            generate: GenerateConfig {
                source_root_marker: "kotlin".into(),
                max_name_length: 80,
            },
            templates: TemplatesConfig {
                enabled: true,
                directory: Some("/user/templates".into()),
            },
            ..Default::default()
        };
        let project = Config {
            generate: GenerateConfig {
                max_name_length: 30,
                ..Default::default()
            },
            templates: TemplatesConfig {
                enabled: false,
                directory: None,
            },
            ..Default::default()
        };

        let merged = merge_configs(user, Some(project));
        assert_eq!(merged.generate.source_root_marker, "kotlin"); // project left default
        assert_eq!(merged.generate.max_name_length, 30);
        assert!(!merged.templates.enabled);
        assert_eq!(merged.templates.directory.as_deref(), Some("/user/templates"));
    }

    #[test]
    fn test_path_expansion() {
        let mut config = Config {
            templates: TemplatesConfig {
                enabled: true,
                directory: Some("~/tpl_test".to_string()),
            },
            ..Default::default()
        };
        expand_config_paths(&mut config);

        let home_dir = dirs::home_dir().unwrap();
        assert_eq!(
            config.templates.directory.unwrap(),
            home_dir.join("tpl_test").to_string_lossy()
        );
    }

    #[test]
    fn test_find_project_config_walks_up_until_git() -> Result<()> {
        let root = tempdir()?;
        let nested = root.path().join("a/b/c");
        fs::create_dir_all(&nested)?;
        fs::write(root.path().join("a").join(PROJECT_CONFIG_FILENAME), "")?;

        let found = find_project_config_path(&nested);
        assert_eq!(found, Some(root.path().join("a").join(PROJECT_CONFIG_FILENAME)));

        // A .git directory below the config file stops the search.
        fs::create_dir(root.path().join("a/b/.git"))?;
        assert_eq!(find_project_config_path(&nested), None);
        Ok(())
    }

    #[test]
    fn test_validate_config_valid() {
        let temp_dir = tempdir().unwrap();
        let config = Config {
            templates: TemplatesConfig {
                enabled: true,
                directory: Some(temp_dir.path().to_string_lossy().to_string()),
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_bad_marker() {
        let config = Config {
            generate: GenerateConfig {
                source_root_marker: "src/main".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("source_root_marker"));
    }

    #[test]
    fn test_validate_config_zero_length() {
        let config = Config {
            generate: GenerateConfig {
                max_name_length: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_template_path_is_file() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("not_a_dir");
        fs::write(&file_path, "").unwrap();

        let config = Config {
            templates: TemplatesConfig {
                enabled: true,
                directory: Some(file_path.to_string_lossy().to_string()),
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("is not a directory"));
    }

    #[test]
    fn test_validate_config_bad_extension() {
        let config = Config {
            stats: StatsConfig {
                extensions: vec!["java".into()],
                ..Default::default()
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("must start with '.'"));
    }
}
