//! Per-kind node checkers
//!
//! Each `check_*` method validates the fields a kind declares itself, in the
//! order required fields, optional fields, nested collections, and then hands
//! the embedded supertype to the supertype's checker. The context is passed
//! through unchanged, so violations raised by a supertype level still carry
//! the concrete node kind.
//!
//! Copyright (c) 2025 vcloud-checks contributors
//! Licensed under the Apache-2.0 license

mod access;
mod catalog;
mod network;
mod org;
mod resource;
mod section;
mod user;
mod vapp;
mod vdc;

use crate::domain::*;
use crate::tables::EnumerationSet;
use crate::validation::base::{Check, Checker, ValidationContext};
use crate::validation::primitives::{check_enumeration, check_ip_address, check_non_negative};
use crate::validation::sink::{CheckResult, ViolationSink};

impl<S: ViolationSink + ?Sized> Checker<'_, S> {
    /// Optional value constrained to an enumeration
    pub(crate) fn enumeration(
        &mut self,
        ctx: &ValidationContext,
        field: &str,
        value: Option<&str>,
        set: &EnumerationSet,
    ) -> CheckResult {
        self.apply_opt(ctx, field, value, |value| check_enumeration(value, set))
    }

    /// Required value constrained to an enumeration
    pub(crate) fn required_enumeration(
        &mut self,
        ctx: &ValidationContext,
        field: &str,
        value: Option<&str>,
        set: &EnumerationSet,
    ) -> CheckResult {
        match self.require(ctx, field, value)? {
            Some(value) => self.apply(ctx, field, check_enumeration(value, set)),
            None => Ok(()),
        }
    }

    pub(crate) fn non_negative<T: Into<i64> + Copy>(
        &mut self,
        ctx: &ValidationContext,
        field: &str,
        value: Option<T>,
    ) -> CheckResult {
        self.apply_opt(ctx, field, value, check_non_negative)
    }

    pub(crate) fn required_non_negative<T: Into<i64> + Copy>(
        &mut self,
        ctx: &ValidationContext,
        field: &str,
        value: Option<&T>,
    ) -> CheckResult {
        match self.require(ctx, field, value)? {
            Some(value) => self.apply(ctx, field, check_non_negative(*value)),
            None => Ok(()),
        }
    }

    pub(crate) fn ip_address(&mut self, ctx: &ValidationContext, field: &str, value: Option<&str>) -> CheckResult {
        self.apply_opt(ctx, field, value, check_ip_address)
    }

    /// Optional `type` attribute constrained to the media types
    pub(crate) fn media_type(&mut self, ctx: &ValidationContext, value: Option<&str>) -> CheckResult {
        let tables = self.tables();
        self.enumeration(ctx, "type", value, &tables.media_types)
    }
}

macro_rules! checked_by {
    ($($ty:ty => $kind:ident, $method:ident;)*) => {
        $(
            impl Check for $ty {
                fn kind(&self) -> NodeKind {
                    NodeKind::$kind
                }

                fn check<S: ViolationSink + ?Sized>(
                    &self,
                    checker: &mut Checker<'_, S>,
                    ctx: &ValidationContext,
                ) -> CheckResult {
                    checker.$method(ctx, self)
                }
            }
        )*
    };
}

checked_by! {
    Resource => Resource, check_resource;
    Reference => Reference, check_reference;
    Link => Link, check_link;
    Entity => Entity, check_entity;
    ResourceEntity => ResourceEntity, check_resource_entity;
    Task => Task, check_task;
    TaskError => TaskError, check_task_error;
    File => File, check_file;
    Metadata => Metadata, check_metadata;
    MetadataEntry => MetadataEntry, check_metadata_entry;
    MetadataValue => MetadataValue, check_metadata_value;
    Owner => Owner, check_owner;
    Org => Org, check_org;
    AdminOrg => AdminOrg, check_admin_org;
    OrgSettings => OrgSettings, check_org_settings;
    OrgGeneralSettings => OrgGeneralSettings, check_general_settings;
    OrgLeaseSettings => OrgLeaseSettings, check_vapp_lease_settings;
    OrgVAppTemplateLeaseSettings => OrgVAppTemplateLeaseSettings, check_vapp_template_lease_settings;
    OrgLdapSettings => OrgLdapSettings, check_ldap_settings;
    CustomOrgLdapSettings => CustomOrgLdapSettings, check_custom_ldap_settings;
    OrgLdapUserAttributes => OrgLdapUserAttributes, check_user_attributes;
    OrgLdapGroupAttributes => OrgLdapGroupAttributes, check_group_attributes;
    OrgEmailSettings => OrgEmailSettings, check_email_settings;
    OrgPasswordPolicySettings => OrgPasswordPolicySettings, check_password_policy;
    Vdc => Vdc, check_vdc;
    AdminVdc => AdminVdc, check_admin_vdc;
    Capacity => Capacity, check_capacity;
    ComputeCapacity => ComputeCapacity, check_compute_capacity;
    Network => Network, check_network;
    NetworkConfiguration => NetworkConfiguration, check_network_configuration;
    IpScope => IpScope, check_ip_scope;
    IpRange => IpRange, check_ip_range;
    SyslogServerSettings => SyslogServerSettings, check_syslog_server_settings;
    RouterInfo => RouterInfo, check_router_info;
    Catalog => Catalog, check_catalog;
    CatalogItem => CatalogItem, check_catalog_item;
    Media => Media, check_media;
    AbstractVApp => AbstractVApp, check_abstract_vapp;
    VApp => VApp, check_vapp;
    Vm => Vm, check_vm;
    VAppTemplate => VAppTemplate, check_vapp_template;
    User => User, check_user;
    Group => Group, check_group;
    ControlAccessParams => ControlAccessParams, check_control_access_params;
    AccessSetting => AccessSetting, check_access_setting;
    VirtualHardwareSection => VirtualHardwareSection, check_virtual_hardware_section;
    ResourceAllocationSettingData => ResourceAllocationSettingData, check_resource_allocation;
    GuestCustomizationSection => GuestCustomizationSection, check_guest_customization_section;
    LeaseSettingsSection => LeaseSettingsSection, check_lease_settings_section;
    NetworkConfigSection => NetworkConfigSection, check_network_config_section;
    VAppNetworkConfiguration => VAppNetworkConfiguration, check_vapp_network_configuration;
    NetworkConnectionSection => NetworkConnectionSection, check_network_connection_section;
    NetworkConnection => NetworkConnection, check_network_connection;
    CustomizationSection => CustomizationSection, check_customization_section;
    ProductSection => ProductSection, check_product_section;
    Property => Property, check_property;
    OperatingSystemSection => OperatingSystemSection, check_operating_system_section;
    NetworkSection => NetworkSection, check_network_section;
    DiskSection => DiskSection, check_disk_section;
    Disk => Disk, check_disk;
    Envelope => Envelope, check_envelope;
    VirtualSystem => VirtualSystem, check_virtual_system;
}

impl Check for Section {
    fn kind(&self) -> NodeKind {
        Section::kind(self)
    }

    fn check<S: ViolationSink + ?Sized>(&self, checker: &mut Checker<'_, S>, ctx: &ValidationContext) -> CheckResult {
        match self {
            Section::VirtualHardware(section) => checker.check_virtual_hardware_section(ctx, section),
            Section::GuestCustomization(section) => checker.check_guest_customization_section(ctx, section),
            Section::LeaseSettings(section) => checker.check_lease_settings_section(ctx, section),
            Section::NetworkConfig(section) => checker.check_network_config_section(ctx, section),
            Section::NetworkConnection(section) => checker.check_network_connection_section(ctx, section),
            Section::Customization(section) => checker.check_customization_section(ctx, section),
            Section::Product(section) => checker.check_product_section(ctx, section),
            Section::OperatingSystem(section) => checker.check_operating_system_section(ctx, section),
            Section::Network(section) => checker.check_network_section(ctx, section),
            Section::Disk(section) => checker.check_disk_section(ctx, section),
        }
    }
}

impl Check for Node {
    fn kind(&self) -> NodeKind {
        Node::kind(self)
    }

    fn check<S: ViolationSink + ?Sized>(&self, checker: &mut Checker<'_, S>, ctx: &ValidationContext) -> CheckResult {
        match self {
            Node::Reference(node) => checker.check_reference(ctx, node),
            Node::Link(node) => checker.check_link(ctx, node),
            Node::Task(node) => checker.check_task(ctx, node),
            Node::File(node) => checker.check_file(ctx, node),
            Node::Metadata(node) => checker.check_metadata(ctx, node),
            Node::MetadataEntry(node) => checker.check_metadata_entry(ctx, node),
            Node::MetadataValue(node) => checker.check_metadata_value(ctx, node),
            Node::Owner(node) => checker.check_owner(ctx, node),
            Node::Org(node) => checker.check_org(ctx, node),
            Node::AdminOrg(node) => checker.check_admin_org(ctx, node),
            Node::OrgSettings(node) => checker.check_org_settings(ctx, node),
            Node::Vdc(node) => checker.check_vdc(ctx, node),
            Node::AdminVdc(node) => checker.check_admin_vdc(ctx, node),
            Node::Network(node) => checker.check_network(ctx, node),
            Node::Catalog(node) | Node::AdminCatalog(node) => checker.check_catalog(ctx, node),
            Node::CatalogItem(node) => checker.check_catalog_item(ctx, node),
            Node::Media(node) => checker.check_media(ctx, node),
            Node::VApp(node) => checker.check_vapp(ctx, node),
            Node::Vm(node) => checker.check_vm(ctx, node),
            Node::VAppTemplate(node) => checker.check_vapp_template(ctx, node),
            Node::User(node) => checker.check_user(ctx, node),
            Node::Group(node) => checker.check_group(ctx, node),
            Node::ControlAccessParams(node) => checker.check_control_access_params(ctx, node),
            Node::Section(section) => section.check(checker, ctx),
            Node::Envelope(node) => checker.check_envelope(ctx, node),
        }
    }
}
