//! Catalogs, catalog items and media
//!
//! Copyright (c) 2025 vcloud-checks contributors
//! Licensed under the Apache-2.0 license

use super::{Entity, Owner, Reference, ResourceEntity};
use serde::{Deserialize, Serialize};

/// A catalog; the administrative view shares the same shape
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(flatten)]
    pub entity: Entity,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub catalog_items: Vec<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    #[serde(flatten)]
    pub entity: Entity,

    /// The published vApp template or media
    #[serde(rename = "entity", skip_serializing_if = "Option::is_none")]
    pub item: Option<Reference>,
}

/// An ISO or floppy image
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    #[serde(flatten)]
    pub resource_entity: ResourceEntity,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
}
