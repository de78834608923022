use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ChangelogError, Result};

/// Name of the per-repository configuration file
pub const LOCAL_CONFIG_FILE: &str = ".changelog.toml";

/// Represents the complete configuration for git-changelog.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub changelog: ChangelogConfig,
}

/// Settings of the changelog step.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ChangelogConfig {
    #[serde(default)]
    pub filters: FiltersConfig,
}

/// Entry filters applied to the commit log.
///
/// `exclude` holds regular expressions matched against each commit subject.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct FiltersConfig {
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Config {
    /// Exclusion patterns in configuration order
    pub fn exclusion_patterns(&self) -> &[String] {
        &self.changelog.filters.exclude
    }

    /// Append patterns after the configured ones
    pub fn add_exclusions<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.changelog
            .filters
            .exclude
            .extend(patterns.into_iter().map(Into::into));
    }
}

/// Location of the user-wide configuration file, if the platform has one
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("git-changelog").join("config.toml"))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `.changelog.toml` in current directory
/// 3. `git-changelog/config.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        PathBuf::from(path)
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        PathBuf::from(LOCAL_CONFIG_FILE)
    } else {
        match user_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(Config::default()),
        }
    };

    read_config(&path)
}

fn read_config(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path).map_err(|e| {
        ChangelogError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;

    toml::from_str(&config_str)
        .map_err(|e| ChangelogError::config(format!("Cannot parse {}: {}", path.display(), e)))
}
