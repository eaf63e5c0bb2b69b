//! Error types and handling for the CLI
//!
//! Every failure mode maps to a distinct process exit code.

use std::io;
use std::path::PathBuf;
use vcloud_checks::TablesError;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Constraint tables could not be loaded
    #[error("Tables error: {0}")]
    Tables(#[from] TablesError),

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Extension is neither JSON nor YAML
    #[error("Unsupported file type for {}: expected .json, .yaml or .yml", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// File content does not decode as a document
    #[error("Failed to parse {} as {}: {}", path.display(), format, message)]
    InvalidDocument {
        path: PathBuf,
        format: String,
        message: String,
    },

    /// One or more documents failed validation
    #[error("{invalid} of {total} document(s) failed validation")]
    ValidationFailed { invalid: usize, total: usize },

    /// Unknown enumeration table name
    #[error("Unknown table '{}'", name)]
    UnknownTable { name: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML serialization error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ValidationFailed { .. } => 1,
            Self::Io(_) => 2,
            Self::Tables(_) => 3,
            Self::FileNotFound { .. } => 4,
            Self::UnsupportedFormat { .. } => 5,
            Self::InvalidDocument { .. } => 6,
            Self::UnknownTable { .. } => 7,
            Self::Config(_) => 8,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::Toml(_) => 14,
            Self::Other { .. } => 99,
        }
    }

    /// Check if this error should display usage help
    pub fn should_show_help(&self) -> bool {
        matches!(self, Self::UnknownTable { .. } | Self::UnsupportedFormat { .. })
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            Error::ValidationFailed { invalid: 1, total: 2 },
            Error::FileNotFound {
                path: PathBuf::from("a.json"),
            },
            Error::UnsupportedFormat {
                path: PathBuf::from("a.xml"),
            },
            Error::UnknownTable { name: "colours".into() },
            Error::config("bad"),
            Error::other("boom"),
        ];
        let mut codes: Vec<i32> = errors.iter().map(Error::exit_code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
        assert_eq!(Error::ValidationFailed { invalid: 1, total: 1 }.exit_code(), 1);
    }

    #[test]
    fn test_format_error_without_color() {
        let error = Error::ValidationFailed { invalid: 2, total: 3 };
        assert_eq!(
            format_error(&error, false),
            "Error: 2 of 3 document(s) failed validation"
        );
    }

    #[test]
    fn test_should_show_help() {
        assert!(Error::UnknownTable { name: "x".into() }.should_show_help());
        assert!(!Error::other("x").should_show_help());
    }
}
