//! OVF sections and the OVF envelope
//!
//! Sections carry the vCloud extension attributes (`href`, `type`, `links`)
//! of a resource, which are checked last like any other supertype.

use crate::domain::{
    CustomizationSection, Disk, DiskSection, Envelope, GuestCustomizationSection, LeaseSettingsSection,
    NetworkConfigSection, NetworkConnection, NetworkConnectionSection, NetworkSection, OperatingSystemSection,
    ProductSection, Property, ResourceAllocationSettingData, SectionBase, VAppNetworkConfiguration,
    VirtualHardwareSection, VirtualSystem,
};
use crate::validation::base::{Checker, ValidationContext};
use crate::validation::error::ViolationKind;
use crate::validation::primitives::check_mac_address;
use crate::validation::sink::{CheckResult, ViolationSink};

impl<S: ViolationSink + ?Sized> Checker<'_, S> {
    fn check_section_base(&mut self, ctx: &ValidationContext, base: &SectionBase) -> CheckResult {
        self.check_resource(ctx, &base.resource)
    }

    /// Transports and the system settings are structure only
    pub fn check_virtual_hardware_section(
        &mut self,
        ctx: &ValidationContext,
        section: &VirtualHardwareSection,
    ) -> CheckResult {
        self.walk_each(ctx, "items", &section.items)?;

        self.check_section_base(ctx, &section.base)
    }

    pub fn check_resource_allocation(
        &mut self,
        ctx: &ValidationContext,
        item: &ResourceAllocationSettingData,
    ) -> CheckResult {
        self.non_negative(ctx, "virtualQuantity", item.virtual_quantity)?;
        self.non_negative(ctx, "reservation", item.reservation)?;
        self.non_negative(ctx, "limit", item.limit)?;
        self.non_negative(ctx, "weight", item.weight)
    }

    /// Settings that only make sense when a feature is enabled must be absent otherwise
    ///
    /// An absent enablement flag counts as disabled. Each broken clause is
    /// reported on the field that breaks it.
    pub fn check_guest_customization_section(
        &mut self,
        ctx: &ValidationContext,
        section: &GuestCustomizationSection,
    ) -> CheckResult {
        if section.join_domain_enabled != Some(true) {
            if section.use_org_settings == Some(true) {
                self.disabled_flag(ctx, "useOrgSettings", "joinDomainEnabled")?;
            }
            let domain_fields = [
                ("domainName", &section.domain_name),
                ("domainUserName", &section.domain_user_name),
                ("domainUserPassword", &section.domain_user_password),
            ];
            for (field, value) in domain_fields {
                if value.is_some() {
                    self.disabled_value(ctx, field, "joinDomainEnabled")?;
                }
            }
        }

        if section.admin_password_enabled != Some(true) {
            if section.admin_password_auto == Some(true) {
                self.disabled_flag(ctx, "adminPasswordAuto", "adminPasswordEnabled")?;
            }
            if section.reset_password_required == Some(true) {
                self.disabled_flag(ctx, "resetPasswordRequired", "adminPasswordEnabled")?;
            }
        }

        if section.admin_password_auto == Some(true) && section.admin_password.is_some() {
            self.report(
                ctx,
                "adminPassword",
                ViolationKind::InvariantViolation,
                "adminPassword absent when adminPasswordAuto is true",
                "present",
            )?;
        }

        self.check_section_base(ctx, &section.base)
    }

    /// A boolean setting switched on while its feature is off
    fn disabled_flag(&mut self, ctx: &ValidationContext, field: &str, flag: &str) -> CheckResult {
        let expected = format!("{} unset or false unless {} is true", field, flag);
        self.report(ctx, field, ViolationKind::InvariantViolation, expected, "true")
    }

    /// A value supplied while its feature is off
    fn disabled_value(&mut self, ctx: &ValidationContext, field: &str, flag: &str) -> CheckResult {
        let expected = format!("{} absent unless {} is true", field, flag);
        self.report(ctx, field, ViolationKind::InvariantViolation, expected, "present")
    }

    pub fn check_lease_settings_section(&mut self, ctx: &ValidationContext, section: &LeaseSettingsSection) -> CheckResult {
        self.non_negative(ctx, "deploymentLeaseInSeconds", section.deployment_lease_in_seconds)?;
        self.non_negative(ctx, "storageLeaseInSeconds", section.storage_lease_in_seconds)?;

        self.check_section_base(ctx, &section.base)
    }

    pub fn check_network_config_section(&mut self, ctx: &ValidationContext, section: &NetworkConfigSection) -> CheckResult {
        self.walk_each(ctx, "networkConfigs", &section.network_configs)?;

        self.check_section_base(ctx, &section.base)
    }

    pub fn check_vapp_network_configuration(
        &mut self,
        ctx: &ValidationContext,
        configuration: &VAppNetworkConfiguration,
    ) -> CheckResult {
        self.require(ctx, "networkName", configuration.network_name.as_deref())?;
        self.require_node(ctx, "configuration", configuration.configuration.as_ref())?;

        self.check_resource(ctx, &configuration.resource)
    }

    pub fn check_network_connection_section(
        &mut self,
        ctx: &ValidationContext,
        section: &NetworkConnectionSection,
    ) -> CheckResult {
        self.walk_each(ctx, "networkConnections", &section.network_connections)?;

        self.check_section_base(ctx, &section.base)
    }

    pub fn check_network_connection(&mut self, ctx: &ValidationContext, connection: &NetworkConnection) -> CheckResult {
        let tables = self.tables();
        self.require(ctx, "network", connection.network.as_deref())?;
        self.required_enumeration(
            ctx,
            "ipAddressAllocationMode",
            connection.ip_address_allocation_mode.as_deref(),
            &tables.ip_allocation_modes,
        )?;

        self.ip_address(ctx, "ipAddress", connection.ip_address.as_deref())?;
        self.ip_address(ctx, "externalIpAddress", connection.external_ip_address.as_deref())?;
        self.apply_opt(ctx, "macAddress", connection.mac_address.as_deref(), check_mac_address)?;
        self.non_negative(ctx, "networkConnectionIndex", connection.network_connection_index)
    }

    pub fn check_customization_section(&mut self, ctx: &ValidationContext, section: &CustomizationSection) -> CheckResult {
        self.check_section_base(ctx, &section.base)
    }

    pub fn check_product_section(&mut self, ctx: &ValidationContext, section: &ProductSection) -> CheckResult {
        self.walk_each(ctx, "properties", &section.properties)?;

        self.check_section_base(ctx, &section.base)
    }

    pub fn check_property(&mut self, ctx: &ValidationContext, property: &Property) -> CheckResult {
        self.require(ctx, "key", property.key.as_deref())?;
        Ok(())
    }

    pub fn check_operating_system_section(
        &mut self,
        ctx: &ValidationContext,
        section: &OperatingSystemSection,
    ) -> CheckResult {
        self.check_section_base(ctx, &section.base)
    }

    pub fn check_network_section(&mut self, ctx: &ValidationContext, section: &NetworkSection) -> CheckResult {
        self.check_section_base(ctx, &section.base)
    }

    pub fn check_disk_section(&mut self, ctx: &ValidationContext, section: &DiskSection) -> CheckResult {
        self.walk_each(ctx, "disks", &section.disks)?;

        self.check_section_base(ctx, &section.base)
    }

    pub fn check_disk(&mut self, ctx: &ValidationContext, disk: &Disk) -> CheckResult {
        self.require(ctx, "diskId", disk.disk_id.as_deref())?;
        self.require(ctx, "capacity", disk.capacity.as_deref())?;
        Ok(())
    }

    pub fn check_envelope(&mut self, ctx: &ValidationContext, envelope: &Envelope) -> CheckResult {
        self.optional_node(ctx, "virtualSystem", envelope.virtual_system.as_ref())?;
        self.walk_each(ctx, "diskSections", &envelope.disk_sections)?;
        self.walk_each(ctx, "networkSections", &envelope.network_sections)
    }

    pub fn check_virtual_system(&mut self, ctx: &ValidationContext, system: &VirtualSystem) -> CheckResult {
        self.optional_node(ctx, "operatingSystemSection", system.operating_system_section.as_ref())?;
        self.walk_each(ctx, "productSections", &system.product_sections)?;
        self.walk_each(ctx, "virtualHardwareSections", &system.virtual_hardware_sections)
    }
}
