//! Virtual datacenters and their capacity blocks
//!
//! Copyright (c) 2025 vcloud-checks contributors
//! Licensed under the Apache-2.0 license

use super::{Entity, Reference};
use serde::{Deserialize, Serialize};

/// A virtual datacenter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vdc {
    #[serde(flatten)]
    pub entity: Entity,

    /// One of `AllocationVApp`, `AllocationPool`, `ReservationPool`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_model: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_capacity: Option<Capacity>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute_capacity: Option<ComputeCapacity>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_entities: Vec<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub available_networks: Vec<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Capabilities>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nic_quota: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_quota: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vm_quota: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
}

/// Administrative view of a virtual datacenter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminVdc {
    #[serde(flatten)]
    pub vdc: Vdc,

    /// Fraction of allocated memory that is guaranteed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_guaranteed_memory: Option<f64>,

    /// Fraction of allocated CPU that is guaranteed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_guaranteed_cpu: Option<f64>,

    #[serde(rename = "vCpuInMhz", skip_serializing_if = "Option::is_none")]
    pub vcpu_in_mhz: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_thin_provision: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_pool_reference: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_vdc_reference: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uses_fast_provisioning: Option<bool>,
}

/// A capacity limit together with its current usage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capacity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub used: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub overhead: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeCapacity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<Capacity>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<Capacity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supported_hardware_versions: Vec<String>,
}
