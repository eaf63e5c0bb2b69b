//! Configuration management for the CLI
//!
//! Configuration is read from the file named by `--config` or
//! `VCLOUD_CHECKS_CONFIG`, otherwise from the first default location that
//! exists. Command-line flags take precedence over every file value.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Validation settings
    pub validation: ValidationSettings,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Defaults for the validate command
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    /// Stop at the first violation of each document
    pub fail_fast: bool,

    /// Maximum violations reported per document (0 = unlimited)
    pub max_errors: usize,

    /// Constraint tables file overriding the built-in ones
    pub tables: Option<PathBuf>,

    /// Check sibling subtrees in parallel
    pub parallel: bool,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: String,

    /// Use colored output by default
    pub color: bool,

    /// Show progress indicators
    pub progress: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: Option<String>,

    /// Log format (compact, full, json)
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
            color: true,
            progress: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            format: "compact".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;

        let config = match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => {
                toml::from_str(&content).map_err(|e| Error::config(format!("{}: {}", path.display(), e)))?
            }
            _ => {
                return Err(Error::config(format!(
                    "unsupported configuration file {}",
                    path.display()
                )))
            }
        };

        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(config) => {
                        tracing::debug!(path = %path.display(), "Loaded configuration");
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to load configuration");
                    }
                }
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        match file {
            Some(path) => Self::from_file(path),
            None => Self::load(),
        }
    }

    /// Configuration file paths checked, in order
    pub fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".vcloud-checks.yaml"),
            PathBuf::from(".vcloud-checks.json"),
            PathBuf::from(".vcloud-checks.toml"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            let dir = config_dir.join("vcloud-checks");
            paths.push(dir.join("config.yaml"));
            paths.push(dir.join("config.json"));
            paths.push(dir.join("config.toml"));
        }

        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".vcloud-checks.yaml"));
            paths.push(home_dir.join(".vcloud-checks.toml"));
        }

        paths
    }
}
