//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod completions;
mod config;
mod tables;
mod validate;

pub use completions::handle_completions;
pub use config::handle_config;
pub use tables::handle_tables;
pub use validate::handle_validate;

use crate::error::{Error, Result};
use std::path::Path;
use tracing::debug;
use vcloud_checks::{ConstraintTables, DecodeError, Format, Node};

/// Constraint tables from `path`, or the built-in ones
pub(crate) fn load_tables(path: Option<&Path>) -> Result<ConstraintTables> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "Loading constraint tables");
            Ok(ConstraintTables::from_path(path)?)
        }
        None => Ok(ConstraintTables::embedded()),
    }
}

/// Read and decode one document, choosing the format by extension
pub(crate) fn read_document(path: &Path) -> Result<Node> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let format = Format::from_path(path).ok_or_else(|| Error::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let content = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = content.len(), "Read document");

    format.decode(&content).map_err(|e| Error::InvalidDocument {
        path: path.to_path_buf(),
        format: format.primary_extension().to_uppercase(),
        message: match e {
            DecodeError::Yaml(source) => source.to_string(),
            DecodeError::Json(source) => source.to_string(),
        },
    })
}
