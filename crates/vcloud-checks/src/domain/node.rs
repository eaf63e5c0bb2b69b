//! Node kinds and the top-level node sum type
//!
//! Copyright (c) 2025 vcloud-checks contributors
//! Licensed under the Apache-2.0 license

use super::{
    AdminOrg, AdminVdc, Catalog, CatalogItem, ControlAccessParams, Envelope, File, Group, Link,
    Media, Metadata, MetadataEntry, MetadataValue, Network, Org, OrgSettings, Owner, Reference,
    Section, Task, User, VApp, VAppTemplate, Vdc, Vm,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag of every kind the engine validates, including embedded value blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeKind {
    Resource,
    Reference,
    Link,
    Entity,
    ResourceEntity,
    Task,
    TaskError,
    File,
    Metadata,
    MetadataEntry,
    MetadataValue,
    Owner,
    Org,
    AdminOrg,
    OrgSettings,
    OrgGeneralSettings,
    OrgLeaseSettings,
    OrgVAppTemplateLeaseSettings,
    OrgLdapSettings,
    CustomOrgLdapSettings,
    OrgLdapUserAttributes,
    OrgLdapGroupAttributes,
    OrgEmailSettings,
    OrgPasswordPolicySettings,
    Vdc,
    AdminVdc,
    Capacity,
    ComputeCapacity,
    Network,
    NetworkConfiguration,
    IpScope,
    IpRange,
    SyslogServerSettings,
    RouterInfo,
    Catalog,
    AdminCatalog,
    CatalogItem,
    Media,
    AbstractVApp,
    VApp,
    Vm,
    VAppTemplate,
    User,
    Group,
    ControlAccessParams,
    AccessSetting,
    VirtualHardwareSection,
    ResourceAllocationSettingData,
    GuestCustomizationSection,
    LeaseSettingsSection,
    NetworkConfigSection,
    VAppNetworkConfiguration,
    NetworkConnectionSection,
    NetworkConnection,
    CustomizationSection,
    ProductSection,
    Property,
    OperatingSystemSection,
    NetworkSection,
    DiskSection,
    Disk,
    Envelope,
    VirtualSystem,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A document root: any node that can be validated on its own
///
/// Serialized with an internal `kind` tag, e.g. `{"kind": "Task", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Node {
    Reference(Reference),
    Link(Link),
    Task(Task),
    File(File),
    Metadata(Metadata),
    MetadataEntry(MetadataEntry),
    MetadataValue(MetadataValue),
    Owner(Owner),
    Org(Org),
    AdminOrg(AdminOrg),
    OrgSettings(OrgSettings),
    Vdc(Vdc),
    AdminVdc(AdminVdc),
    Network(Network),
    Catalog(Catalog),
    AdminCatalog(Catalog),
    CatalogItem(CatalogItem),
    Media(Media),
    VApp(VApp),
    Vm(Vm),
    VAppTemplate(VAppTemplate),
    User(User),
    Group(Group),
    ControlAccessParams(ControlAccessParams),
    Section(Section),
    Envelope(Envelope),
}

impl Node {
    /// Concrete kind of the document root
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Reference(_) => NodeKind::Reference,
            Node::Link(_) => NodeKind::Link,
            Node::Task(_) => NodeKind::Task,
            Node::File(_) => NodeKind::File,
            Node::Metadata(_) => NodeKind::Metadata,
            Node::MetadataEntry(_) => NodeKind::MetadataEntry,
            Node::MetadataValue(_) => NodeKind::MetadataValue,
            Node::Owner(_) => NodeKind::Owner,
            Node::Org(_) => NodeKind::Org,
            Node::AdminOrg(_) => NodeKind::AdminOrg,
            Node::OrgSettings(_) => NodeKind::OrgSettings,
            Node::Vdc(_) => NodeKind::Vdc,
            Node::AdminVdc(_) => NodeKind::AdminVdc,
            Node::Network(_) => NodeKind::Network,
            Node::Catalog(_) => NodeKind::Catalog,
            Node::AdminCatalog(_) => NodeKind::AdminCatalog,
            Node::CatalogItem(_) => NodeKind::CatalogItem,
            Node::Media(_) => NodeKind::Media,
            Node::VApp(_) => NodeKind::VApp,
            Node::Vm(_) => NodeKind::Vm,
            Node::VAppTemplate(_) => NodeKind::VAppTemplate,
            Node::User(_) => NodeKind::User,
            Node::Group(_) => NodeKind::Group,
            Node::ControlAccessParams(_) => NodeKind::ControlAccessParams,
            Node::Section(section) => section.kind(),
            Node::Envelope(_) => NodeKind::Envelope,
        }
    }
}

macro_rules! node_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::$variant(value)
                }
            }
        )*
    };
}

node_from!(
    Reference(Reference),
    Link(Link),
    Task(Task),
    File(File),
    Metadata(Metadata),
    MetadataEntry(MetadataEntry),
    MetadataValue(MetadataValue),
    Owner(Owner),
    Org(Org),
    AdminOrg(AdminOrg),
    OrgSettings(OrgSettings),
    Vdc(Vdc),
    AdminVdc(AdminVdc),
    Network(Network),
    Catalog(Catalog),
    CatalogItem(CatalogItem),
    Media(Media),
    VApp(VApp),
    Vm(Vm),
    VAppTemplate(VAppTemplate),
    User(User),
    Group(Group),
    ControlAccessParams(ControlAccessParams),
    Section(Section),
    Envelope(Envelope),
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_kind_display_matches_serialized_name() {
        assert_eq!(NodeKind::VAppTemplate.to_string(), "VAppTemplate");
        assert_eq!(serde_json::to_value(NodeKind::VAppTemplate).unwrap(), json!("VAppTemplate"));
    }

    #[test]
    fn test_node_deserializes_by_kind_tag() {
        let node: Node = serde_json::from_value(json!({
            "kind": "Task",
            "name": "deploy",
            "status": "running",
            "progress": 40
        }))
        .unwrap();

        assert_eq!(node.kind(), NodeKind::Task);
        match node {
            Node::Task(task) => {
                assert_eq!(task.entity.name.as_deref(), Some("deploy"));
                assert_eq!(task.progress, Some(40));
            }
            other => panic!("unexpected node {:?}", other.kind()),
        }
    }

    #[test]
    fn test_admin_catalog_keeps_its_kind() {
        let node: Node = serde_json::from_value(json!({"kind": "AdminCatalog", "name": "public"})).unwrap();
        assert_eq!(node.kind(), NodeKind::AdminCatalog);
    }
}
