//! Configuration directory and persisted defaults

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Get the configuration directory for wordtool
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir().context("Could not determine local data directory")?;
    Ok(base.join("wordtool"))
}

/// Get the default config file path
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Get the config file path with optional override
pub fn config_file_path_with_override(custom_path: Option<&Path>) -> Result<PathBuf> {
    match custom_path {
        Some(path) => Ok(path.to_path_buf()),
        None => default_config_path(),
    }
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}. Please use a .json file.",
            ext
        )),
        None => Err(anyhow::anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

/// User defaults stored in the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PersistentConfig {
    /// Default dictionary path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dictionary: Option<PathBuf>,
    /// Default sort specifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl PersistentConfig {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from custom path
    ///
    /// A missing file yields the defaults.
    pub fn load_from(custom_path: Option<&Path>) -> Result<Self> {
        let path = config_file_path_with_override(custom_path)?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(None)
    }

    /// Save configuration to custom path
    pub fn save_to(&self, custom_path: Option<&Path>) -> Result<()> {
        let path = config_file_path_with_override(custom_path)?;
        validate_config_path(&path)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(&self, dictionary: Option<PathBuf>, sort: Option<String>) -> Self {
        Self {
            dictionary: dictionary.or_else(|| self.dictionary.clone()),
            sort: sort.or_else(|| self.sort.clone()),
        }
    }
}
