//! vApps, virtual machines and vApp templates
//!
//! Copyright (c) 2025 vcloud-checks contributors
//! Licensed under the Apache-2.0 license

use super::{Owner, Reference, ResourceEntity, Section};
use serde::{Deserialize, Serialize};

/// Fields shared by vApps and virtual machines
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbstractVApp {
    #[serde(flatten)]
    pub resource_entity: ResourceEntity,

    #[serde(rename = "vAppParent", skip_serializing_if = "Option::is_none")]
    pub vapp_parent: Option<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployed: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VApp {
    #[serde(flatten)]
    pub abstract_vapp: AbstractVApp,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_maintenance_mode: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<VAppChildren>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ovf_descriptor_uploaded: Option<bool>,
}

/// Nested vApps and virtual machines of a vApp
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VAppChildren {
    #[serde(rename = "vApps", default, skip_serializing_if = "Vec::is_empty")]
    pub vapps: Vec<VApp>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vms: Vec<Vm>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vm {
    #[serde(flatten)]
    pub abstract_vapp: AbstractVApp,

    /// OVF environment of the guest, carried through unchecked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<serde_json::Value>,

    #[serde(rename = "vAppScopedLocalId", skip_serializing_if = "Option::is_none")]
    pub vapp_scoped_local_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_customization: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VAppTemplate {
    #[serde(flatten)]
    pub resource_entity: ResourceEntity,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<VAppTemplate>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,

    #[serde(rename = "vAppScopedLocalId", skip_serializing_if = "Option::is_none")]
    pub vapp_scoped_local_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ovf_descriptor_uploaded: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold_master: Option<bool>,
}
