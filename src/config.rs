use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FinalizeError, Result};

/// Represents the complete configuration for finalize.
///
/// Contains the fragment directory layout, the allowed fragment keywords and
/// the external tools used to render the changelog and bump the version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_changelog_dir")]
    pub changelog_dir: PathBuf,

    #[serde(default = "default_ignore_file")]
    pub ignore_file: String,

    #[serde(default = "default_allowed_keywords")]
    pub allowed_keywords: Vec<String>,

    #[serde(default)]
    pub tools: ToolsConfig,
}

fn default_changelog_dir() -> PathBuf {
    PathBuf::from("changelog.d")
}

fn default_ignore_file() -> String {
    ".gitignore".to_string()
}

/// Returns the keywords a fragment name must contain one of.
fn default_allowed_keywords() -> Vec<String> {
    vec![
        "deprecation".to_string(),
        "breaking".to_string(),
        "change".to_string(),
        "doc".to_string(),
        "misc".to_string(),
    ]
}

fn default_interpreter() -> String {
    "python3".to_string()
}

fn default_bump_module() -> String {
    "bumpversion".to_string()
}

fn default_changelog_module() -> String {
    "towncrier".to_string()
}

/// External tools, each invoked as `<interpreter> -m <module>`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ToolsConfig {
    #[serde(default = "default_interpreter")]
    pub interpreter: String,

    #[serde(default = "default_bump_module")]
    pub bump_module: String,

    #[serde(default = "default_changelog_module")]
    pub changelog_module: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        ToolsConfig {
            interpreter: default_interpreter(),
            bump_module: default_bump_module(),
            changelog_module: default_changelog_module(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            changelog_dir: default_changelog_dir(),
            ignore_file: default_ignore_file(),
            allowed_keywords: default_allowed_keywords(),
            tools: ToolsConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `finalize.toml` in current directory
/// 3. `.finalize.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if Path::new("./finalize.toml").exists() {
        PathBuf::from("./finalize.toml")
    } else if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join(".finalize.toml");
        if !path.exists() {
            return Ok(Config::default());
        }
        path
    } else {
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "loading configuration");

    let config_str = fs::read_to_string(&path).map_err(|e| {
        FinalizeError::config(format!("cannot read {}: {}", path.display(), e))
    })?;

    toml::from_str(&config_str)
        .map_err(|e| FinalizeError::config(format!("cannot parse {}: {}", path.display(), e)))
}
