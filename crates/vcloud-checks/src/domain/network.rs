//! Networks and their addressing configuration
//!
//! Copyright (c) 2025 vcloud-checks contributors
//! Licensed under the Apache-2.0 license

use super::{Entity, Reference};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    #[serde(flatten)]
    pub entity: Entity,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<NetworkConfiguration>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_scope: Option<IpScope>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_network: Option<Reference>,

    /// One of `bridged`, `isolated`, `natRouted`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fence_mode: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub retain_net_info_across_deployments: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<NetworkFeatures>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub syslog_server_settings: Option<SyslogServerSettings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub router_info: Option<RouterInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkFeatures {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub network_services: Vec<NetworkService>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
}

/// Addressing scope of a network
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpScope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_inherited: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub netmask: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns1: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_suffix: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ip_ranges: Vec<IpRange>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allocated_ip_addresses: Vec<String>,
}

/// Inclusive range of addresses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyslogServerSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syslog_server_ip1: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub syslog_server_ip2: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_ip: Option<String>,
}
