//! Error types for constraint table loading
//!
//! Copyright (c) 2025 vcloud-checks contributors
//! Licensed under the Apache-2.0 license

use std::path::PathBuf;
use thiserror::Error;

/// Result type for table loading
pub type TablesResult<T> = Result<T, TablesError>;

#[derive(Error, Debug)]
pub enum TablesError {
    /// File I/O errors
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parsing errors
    #[error("Failed to parse YAML file '{path}': {source}")]
    YamlParseError {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// JSON parsing errors
    #[error("Failed to parse JSON file '{path}': {source}")]
    JsonParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Unsupported file format
    #[error("Unsupported file format for '{path}'. Expected .yaml, .yml, or .json")]
    UnsupportedFormat { path: PathBuf },

    /// A table override that would reject every value
    #[error("Enumeration '{name}' in '{path}' must not be empty")]
    EmptyEnumeration { name: String, path: PathBuf },
}

impl TablesError {
    pub fn io_error(path: PathBuf, error: std::io::Error) -> Self {
        Self::IoError { path, source: error }
    }

    pub fn unsupported_format(path: PathBuf) -> Self {
        Self::UnsupportedFormat { path }
    }
}
