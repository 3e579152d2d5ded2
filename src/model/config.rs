//! Application configuration structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Scanning options
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ScanConfig {
    /// Include hidden (dotfile) entries. Same effect as `--hidden`.
    #[serde(default)]
    pub include_hidden: bool,
}

/// Output options
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutputConfig {
    /// Directory used when no DIR argument is given. Tilde-expanded.
    #[serde(default = "default_dir")]
    pub default_dir: String,
}

fn default_dir() -> String {
    "~/.envdir".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            default_dir: default_dir(),
        }
    }
}

impl Config {
    /// Get the envout configuration directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("~"))
                    .join(".config")
            })
            .join("envout")
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, or return default if file doesn't exist
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Config::default())
        }
    }
}
