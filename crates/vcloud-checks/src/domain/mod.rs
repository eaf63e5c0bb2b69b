//! Typed vCloud domain documents
//!
//! Every struct deserializes from camelCase JSON or YAML. A subtype embeds
//! its supertype's fields with `#[serde(flatten)]`, so a `Task` document
//! carries the `Entity` and `Resource` fields at the same level:
//!
//! ```rust
//! use vcloud_checks::domain::Task;
//!
//! let task: Task = serde_json::from_str(
//!     r#"{"name": "deploy", "href": "https://vcd.example.com/api/task/1", "status": "running"}"#,
//! ).unwrap();
//! assert_eq!(task.entity.resource.href.as_deref(), Some("https://vcd.example.com/api/task/1"));
//! ```
//!
//! Copyright (c) 2025 vcloud-checks contributors
//! Licensed under the Apache-2.0 license

pub mod access;
pub mod catalog;
pub mod network;
pub mod node;
pub mod org;
pub mod resource;
pub mod section;
pub mod user;
pub mod vapp;
pub mod vdc;

pub use access::{AccessSetting, ControlAccessParams};
pub use catalog::{Catalog, CatalogItem, Media};
pub use network::{
    IpRange, IpScope, Network, NetworkConfiguration, NetworkFeatures, NetworkService, RouterInfo,
    SyslogServerSettings,
};
pub use node::{Node, NodeKind};
pub use org::{
    AdminOrg, CustomOrgLdapSettings, Org, OrgEmailSettings, OrgGeneralSettings, OrgLdapGroupAttributes,
    OrgLdapSettings, OrgLdapUserAttributes, OrgLeaseSettings, OrgPasswordPolicySettings, OrgSettings,
    OrgVAppTemplateLeaseSettings,
};
pub use resource::{
    Entity, File, Link, Metadata, MetadataEntry, MetadataValue, Owner, Reference, Resource, ResourceEntity,
    Task, TaskError,
};
pub use section::{
    CustomizationSection, Disk, DiskSection, Envelope, GuestCustomizationSection, LeaseSettingsSection,
    NetworkConfigSection, NetworkConnection, NetworkConnectionSection, NetworkSection, OperatingSystemSection,
    OvfNetwork, ProductSection, Property, ResourceAllocationSettingData, Section, SectionBase,
    VAppNetworkConfiguration, VirtualHardwareSection, VirtualSystem, VirtualSystemSettingData,
};
pub use user::{Group, User};
pub use vapp::{AbstractVApp, VApp, VAppChildren, VAppTemplate, Vm};
pub use vdc::{AdminVdc, Capabilities, Capacity, ComputeCapacity, Vdc};
