//! File format detection and decoding for YAML and JSON inputs
//!
//! Copyright (c) 2025 vcloud-checks contributors
//! Licensed under the Apache-2.0 license

use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML format (.yaml, .yml)
    Yaml,
    /// JSON format (.json)
    Json,
}

/// Failure to decode content in a given format
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Format {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension().and_then(|ext| ext.to_str())?;
        match extension.to_lowercase().as_str() {
            "yaml" | "yml" => Some(Format::Yaml),
            "json" => Some(Format::Json),
            _ => None,
        }
    }

    /// Get the primary file extension for this format
    pub fn primary_extension(&self) -> &'static str {
        match self {
            Format::Yaml => "yaml",
            Format::Json => "json",
        }
    }

    /// Decode `content` into a typed value
    pub fn decode<T: DeserializeOwned>(&self, content: &str) -> Result<T, DecodeError> {
        match self {
            Format::Yaml => Ok(serde_yaml::from_str(content)?),
            Format::Json => Ok(serde_json::from_str(content)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("vapp.yaml")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("vapp.YML")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("vapp.json")), Some(Format::Json));
        assert_eq!(Format::from_path(Path::new("vapp.xml")), None);
        assert_eq!(Format::from_path(Path::new("vapp")), None);
    }

    #[test]
    fn test_decode_yaml_and_json() {
        let yaml: BTreeMap<String, i32> = Format::Yaml.decode("nicQuota: 4\n").unwrap();
        let json: BTreeMap<String, i32> = Format::Json.decode(r#"{"nicQuota": 4}"#).unwrap();
        assert_eq!(yaml, json);

        let err = Format::Json.decode::<BTreeMap<String, i32>>("nicQuota: 4").unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }
}
