//! Closed enumeration tables and the identifier namespace
//!
//! The tables are immutable once built and are shared between validation runs
//! behind an `Arc`. The built-in tables cover the vCloud Director 1.5 API;
//! any set can be replaced from a YAML or JSON file:
//!
//! ```yaml
//! identifierNamespace: vcloud
//! taskStatuses: [queued, running, success, error]
//! fenceModes: [bridged, isolated, natRouted]
//! ```
//!
//! Sets absent from the file keep their built-in values.
//!
//! Copyright (c) 2025 vcloud-checks contributors
//! Licensed under the Apache-2.0 license

mod defaults;
pub mod error;

pub use error::{TablesError, TablesResult};

use crate::format::{DecodeError, Format};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming a tables file to load instead of the built-in tables
pub const TABLES_PATH_ENV: &str = "VCLOUD_CHECKS_TABLES_PATH";

/// A named closed set of admissible string values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumerationSet {
    name: &'static str,
    values: BTreeSet<String>,
}

impl EnumerationSet {
    pub fn new<I, S>(name: &'static str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    /// Every admissible value, sorted
    pub fn admissible(&self) -> Vec<String> {
        self.values.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The constraint tables consulted by the checkers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintTables {
    pub identifier_namespace: String,
    pub media_types: EnumerationSet,
    pub link_relations: EnumerationSet,
    pub task_statuses: EnumerationSet,
    pub allocation_models: EnumerationSet,
    pub authentication_mechanisms: EnumerationSet,
    pub connector_types: EnumerationSet,
    pub ldap_modes: EnumerationSet,
    pub ip_allocation_modes: EnumerationSet,
    pub access_levels: EnumerationSet,
    pub image_types: EnumerationSet,
    pub fence_modes: EnumerationSet,
}

impl Default for ConstraintTables {
    fn default() -> Self {
        Self::embedded()
    }
}

/// On-disk shape of a tables override file
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct TablesFile {
    identifier_namespace: Option<String>,
    media_types: Option<Vec<String>>,
    link_relations: Option<Vec<String>>,
    task_statuses: Option<Vec<String>>,
    allocation_models: Option<Vec<String>>,
    authentication_mechanisms: Option<Vec<String>>,
    connector_types: Option<Vec<String>>,
    ldap_modes: Option<Vec<String>>,
    ip_allocation_modes: Option<Vec<String>>,
    access_levels: Option<Vec<String>>,
    image_types: Option<Vec<String>>,
    fence_modes: Option<Vec<String>>,
}

impl ConstraintTables {
    /// The built-in vCloud Director tables
    pub fn embedded() -> Self {
        Self {
            identifier_namespace: defaults::IDENTIFIER_NAMESPACE.to_string(),
            media_types: EnumerationSet::new("mediaTypes", defaults::MEDIA_TYPES.iter().copied()),
            link_relations: EnumerationSet::new("linkRelations", defaults::LINK_RELATIONS.iter().copied()),
            task_statuses: EnumerationSet::new("taskStatuses", defaults::TASK_STATUSES.iter().copied()),
            allocation_models: EnumerationSet::new(
                "allocationModels",
                defaults::ALLOCATION_MODELS.iter().copied(),
            ),
            authentication_mechanisms: EnumerationSet::new(
                "authenticationMechanisms",
                defaults::AUTHENTICATION_MECHANISMS.iter().copied(),
            ),
            connector_types: EnumerationSet::new("connectorTypes", defaults::CONNECTOR_TYPES.iter().copied()),
            ldap_modes: EnumerationSet::new("ldapModes", defaults::LDAP_MODES.iter().copied()),
            ip_allocation_modes: EnumerationSet::new(
                "ipAllocationModes",
                defaults::IP_ALLOCATION_MODES.iter().copied(),
            ),
            access_levels: EnumerationSet::new("accessLevels", defaults::ACCESS_LEVELS.iter().copied()),
            image_types: EnumerationSet::new("imageTypes", defaults::IMAGE_TYPES.iter().copied()),
            fence_modes: EnumerationSet::new("fenceModes", defaults::FENCE_MODES.iter().copied()),
        }
    }

    /// Load tables from a `.yaml`, `.yml` or `.json` file on top of the built-in ones
    pub fn from_path(path: impl AsRef<Path>) -> TablesResult<Self> {
        let path = path.as_ref();
        let format = Format::from_path(path).ok_or_else(|| TablesError::unsupported_format(path.to_path_buf()))?;
        let content =
            std::fs::read_to_string(path).map_err(|e| TablesError::io_error(path.to_path_buf(), e))?;

        let file: TablesFile = format.decode(&content).map_err(|e| match e {
            DecodeError::Yaml(source) => TablesError::YamlParseError {
                path: path.to_path_buf(),
                source,
            },
            DecodeError::Json(source) => TablesError::JsonParseError {
                path: path.to_path_buf(),
                source,
            },
        })?;

        debug!(path = %path.display(), "loaded constraint tables");
        Self::embedded().overlay(file, path)
    }

    /// Tables named by `VCLOUD_CHECKS_TABLES_PATH`, or the built-in tables
    pub fn load() -> TablesResult<Self> {
        match std::env::var_os(TABLES_PATH_ENV) {
            Some(path) if !path.is_empty() => Self::from_path(PathBuf::from(path)),
            _ => Ok(Self::embedded()),
        }
    }

    /// Every enumeration set, in a stable order
    pub fn enumerations(&self) -> [&EnumerationSet; 11] {
        [
            &self.media_types,
            &self.link_relations,
            &self.task_statuses,
            &self.allocation_models,
            &self.authentication_mechanisms,
            &self.connector_types,
            &self.ldap_modes,
            &self.ip_allocation_modes,
            &self.access_levels,
            &self.image_types,
            &self.fence_modes,
        ]
    }

    /// Look up an enumeration set by its serialized name
    pub fn enumeration(&self, name: &str) -> Option<&EnumerationSet> {
        self.enumerations().into_iter().find(|set| set.name() == name)
    }

    fn overlay(mut self, file: TablesFile, path: &Path) -> TablesResult<Self> {
        if let Some(namespace) = file.identifier_namespace {
            self.identifier_namespace = namespace;
        }

        let overrides = [
            (&mut self.media_types, file.media_types),
            (&mut self.link_relations, file.link_relations),
            (&mut self.task_statuses, file.task_statuses),
            (&mut self.allocation_models, file.allocation_models),
            (&mut self.authentication_mechanisms, file.authentication_mechanisms),
            (&mut self.connector_types, file.connector_types),
            (&mut self.ldap_modes, file.ldap_modes),
            (&mut self.ip_allocation_modes, file.ip_allocation_modes),
            (&mut self.access_levels, file.access_levels),
            (&mut self.image_types, file.image_types),
            (&mut self.fence_modes, file.fence_modes),
        ];

        for (set, values) in overrides {
            let Some(values) = values else { continue };
            if values.is_empty() {
                return Err(TablesError::EmptyEnumeration {
                    name: set.name().to_string(),
                    path: path.to_path_buf(),
                });
            }
            *set = EnumerationSet::new(set.name(), values);
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_tables() {
        let tables = ConstraintTables::embedded();
        assert_eq!(tables.identifier_namespace, "vcloud");
        assert!(tables.task_statuses.contains("success"));
        assert!(!tables.task_statuses.contains("SUCCESS"));
        assert!(tables.link_relations.contains("power:powerOn"));
        assert!(tables.media_types.contains("application/vnd.vmware.vcloud.vApp+xml"));
        assert_eq!(tables.allocation_models.len(), 3);
    }

    #[test]
    fn test_admissible_values_are_sorted() {
        let tables = ConstraintTables::embedded();
        assert_eq!(
            tables.access_levels.admissible(),
            vec!["Change".to_string(), "FullControl".to_string(), "ReadOnly".to_string()]
        );
    }

    #[test]
    fn test_enumeration_lookup_by_name() {
        let tables = ConstraintTables::embedded();
        assert_eq!(tables.enumeration("fenceModes").map(|s| s.len()), Some(3));
        assert!(tables.enumeration("colours").is_none());
        assert!(tables.enumerations().iter().all(|set| !set.is_empty()));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = ConstraintTables::from_path("tables.toml").unwrap_err();
        assert!(matches!(err, TablesError::UnsupportedFormat { .. }));
    }
}
