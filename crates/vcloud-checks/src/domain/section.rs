//! OVF sections attached to vApps, plus the OVF envelope
//!
//! Copyright (c) 2025 vcloud-checks contributors
//! Licensed under the Apache-2.0 license

use super::{NetworkConfiguration, NodeKind, Resource};
use serde::{Deserialize, Serialize};

/// Fields shared by every section
///
/// vCloud extends OVF sections with `href`, `type` and `links`, which are
/// held in the embedded resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionBase {
    #[serde(flatten)]
    pub resource: Resource,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

/// A section of a vApp, tagged by `sectionType`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "sectionType")]
pub enum Section {
    VirtualHardware(VirtualHardwareSection),
    GuestCustomization(GuestCustomizationSection),
    LeaseSettings(LeaseSettingsSection),
    NetworkConfig(NetworkConfigSection),
    NetworkConnection(NetworkConnectionSection),
    Customization(CustomizationSection),
    Product(ProductSection),
    OperatingSystem(OperatingSystemSection),
    Network(NetworkSection),
    Disk(DiskSection),
}

impl Section {
    pub fn kind(&self) -> NodeKind {
        match self {
            Section::VirtualHardware(_) => NodeKind::VirtualHardwareSection,
            Section::GuestCustomization(_) => NodeKind::GuestCustomizationSection,
            Section::LeaseSettings(_) => NodeKind::LeaseSettingsSection,
            Section::NetworkConfig(_) => NodeKind::NetworkConfigSection,
            Section::NetworkConnection(_) => NodeKind::NetworkConnectionSection,
            Section::Customization(_) => NodeKind::CustomizationSection,
            Section::Product(_) => NodeKind::ProductSection,
            Section::OperatingSystem(_) => NodeKind::OperatingSystemSection,
            Section::Network(_) => NodeKind::NetworkSection,
            Section::Disk(_) => NodeKind::DiskSection,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualHardwareSection {
    #[serde(flatten)]
    pub base: SectionBase,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<VirtualSystemSettingData>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transports: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ResourceAllocationSettingData>,
}

/// CIM settings of the virtual system; carried through unchecked
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualSystemSettingData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_system_identifier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_system_type: Option<String>,
}

/// A CIM hardware item (CPU, memory, disk controller, NIC, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceAllocationSettingData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_quantity: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub connection: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub host_resource: Vec<String>,
}

/// Guest OS customization settings of a virtual machine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestCustomizationSection {
    #[serde(flatten)]
    pub base: SectionBase,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_sid: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_machine_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_domain_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_org_settings: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_user_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_user_password: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_password_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_password_auto: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_password: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_password_required: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customization_script: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub computer_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseSettingsSection {
    #[serde(flatten)]
    pub base: SectionBase,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_lease_in_seconds: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_lease_in_seconds: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_lease_expiration: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_lease_expiration: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfigSection {
    #[serde(flatten)]
    pub base: SectionBase,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub network_configs: Vec<VAppNetworkConfiguration>,
}

/// A network as configured inside a vApp
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VAppNetworkConfiguration {
    #[serde(flatten)]
    pub resource: Resource,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<NetworkConfiguration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deployed: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConnectionSection {
    #[serde(flatten)]
    pub base: SectionBase,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_network_connection_index: Option<i32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub network_connections: Vec<NetworkConnection>,
}

/// Attachment of a virtual NIC to a network
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConnection {
    /// Name of the attached network
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_connection_index: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_ip_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_connected: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,

    /// One of `POOL`, `DHCP`, `MANUAL`, `NONE`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address_allocation_mode: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationSection {
    #[serde(flatten)]
    pub base: SectionBase,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customize_on_instantiate: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSection {
    #[serde(flatten)]
    pub base: SectionBase,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,
}

/// A configurable product property
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_configurable: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingSystemSection {
    #[serde(flatten)]
    pub base: SectionBase,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSection {
    #[serde(flatten)]
    pub base: SectionBase,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<OvfNetwork>,
}

/// A logical network declared by an OVF package
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OvfNetwork {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskSection {
    #[serde(flatten)]
    pub base: SectionBase,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disks: Vec<Disk>,
}

/// A virtual disk declared by an OVF package
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disk {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_id: Option<String>,

    /// Capacity, possibly an expression over product properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_allocation_units: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_ref: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub populated_size: Option<i64>,
}

/// An OVF package descriptor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disk_sections: Vec<DiskSection>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub network_sections: Vec<NetworkSection>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_system: Option<VirtualSystem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualSystem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub product_sections: Vec<ProductSection>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub virtual_hardware_sections: Vec<VirtualHardwareSection>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_system_section: Option<OperatingSystemSection>,
}
