//! Organizations and organization settings

use crate::domain::{
    AdminOrg, CustomOrgLdapSettings, Org, OrgEmailSettings, OrgGeneralSettings, OrgLdapGroupAttributes,
    OrgLdapSettings, OrgLdapUserAttributes, OrgLeaseSettings, OrgPasswordPolicySettings, OrgSettings,
    OrgVAppTemplateLeaseSettings,
};
use crate::validation::base::{Checker, ValidationContext};
use crate::validation::primitives::check_email_address;
use crate::validation::sink::{CheckResult, ViolationSink};

impl<S: ViolationSink + ?Sized> Checker<'_, S> {
    pub fn check_org(&mut self, ctx: &ValidationContext, org: &Org) -> CheckResult {
        self.require(ctx, "fullName", org.full_name.as_deref())?;

        self.check_entity(ctx, &org.entity)
    }

    pub fn check_admin_org(&mut self, ctx: &ValidationContext, org: &AdminOrg) -> CheckResult {
        self.require_node(ctx, "settings", org.settings.as_ref())?;

        self.walk_each(ctx, "groups", &org.groups)?;
        self.walk_each(ctx, "catalogs", &org.catalogs)?;
        self.walk_each(ctx, "vdcs", &org.vdcs)?;
        self.walk_each(ctx, "networks", &org.networks)?;

        self.check_org(ctx, &org.org)
    }

    pub fn check_org_settings(&mut self, ctx: &ValidationContext, settings: &OrgSettings) -> CheckResult {
        self.optional_node(ctx, "generalSettings", settings.general_settings.as_ref())?;
        self.optional_node(ctx, "vAppLeaseSettings", settings.vapp_lease_settings.as_ref())?;
        self.optional_node(
            ctx,
            "vAppTemplateLeaseSettings",
            settings.vapp_template_lease_settings.as_ref(),
        )?;
        self.optional_node(ctx, "ldapSettings", settings.ldap_settings.as_ref())?;
        self.optional_node(ctx, "emailSettings", settings.email_settings.as_ref())?;
        self.optional_node(ctx, "passwordPolicy", settings.password_policy.as_ref())?;

        self.check_resource(ctx, &settings.resource)
    }

    pub fn check_general_settings(&mut self, ctx: &ValidationContext, settings: &OrgGeneralSettings) -> CheckResult {
        self.non_negative(ctx, "deployedVmQuota", settings.deployed_vm_quota)?;
        self.non_negative(ctx, "storedVmQuota", settings.stored_vm_quota)?;
        self.non_negative(ctx, "delayAfterPowerOnSeconds", settings.delay_after_power_on_seconds)?;

        self.check_resource(ctx, &settings.resource)
    }

    pub fn check_vapp_lease_settings(&mut self, ctx: &ValidationContext, settings: &OrgLeaseSettings) -> CheckResult {
        self.non_negative(ctx, "storageLeaseSeconds", settings.storage_lease_seconds)?;
        self.non_negative(ctx, "deploymentLeaseSeconds", settings.deployment_lease_seconds)?;

        self.check_resource(ctx, &settings.resource)
    }

    pub fn check_vapp_template_lease_settings(
        &mut self,
        ctx: &ValidationContext,
        settings: &OrgVAppTemplateLeaseSettings,
    ) -> CheckResult {
        self.non_negative(ctx, "storageLeaseSeconds", settings.storage_lease_seconds)?;

        self.check_resource(ctx, &settings.resource)
    }

    pub fn check_ldap_settings(&mut self, ctx: &ValidationContext, settings: &OrgLdapSettings) -> CheckResult {
        let tables = self.tables();
        self.enumeration(ctx, "ldapMode", settings.ldap_mode.as_deref(), &tables.ldap_modes)?;
        self.optional_node(ctx, "customOrgLdapSettings", settings.custom_org_ldap_settings.as_ref())?;

        self.check_resource(ctx, &settings.resource)
    }

    /// Connection details; SSL flags, realm, search bases and credentials are unchecked
    pub fn check_custom_ldap_settings(
        &mut self,
        ctx: &ValidationContext,
        settings: &CustomOrgLdapSettings,
    ) -> CheckResult {
        let tables = self.tables();
        self.require(ctx, "hostName", settings.host_name.as_deref())?;
        self.required_non_negative(ctx, "port", settings.port.as_ref())?;
        self.required_enumeration(
            ctx,
            "authenticationMechanism",
            settings.authentication_mechanism.as_deref(),
            &tables.authentication_mechanisms,
        )?;
        self.require(ctx, "isGroupSearchBaseEnabled", settings.is_group_search_base_enabled.as_ref())?;
        self.required_enumeration(
            ctx,
            "connectorType",
            settings.connector_type.as_deref(),
            &tables.connector_types,
        )?;
        self.require_node(ctx, "userAttributes", settings.user_attributes.as_ref())?;
        self.require_node(ctx, "groupAttributes", settings.group_attributes.as_ref())
    }

    pub fn check_user_attributes(&mut self, ctx: &ValidationContext, attributes: &OrgLdapUserAttributes) -> CheckResult {
        let required = [
            ("objectClass", &attributes.object_class),
            ("objectIdentifier", &attributes.object_identifier),
            ("userName", &attributes.user_name),
            ("email", &attributes.email),
            ("fullName", &attributes.full_name),
            ("givenName", &attributes.given_name),
            ("surname", &attributes.surname),
            ("telephone", &attributes.telephone),
            ("groupMembershipIdentifier", &attributes.group_membership_identifier),
        ];
        for (field, value) in required {
            self.require(ctx, field, value.as_deref())?;
        }
        Ok(())
    }

    pub fn check_group_attributes(
        &mut self,
        ctx: &ValidationContext,
        attributes: &OrgLdapGroupAttributes,
    ) -> CheckResult {
        let required = [
            ("objectClass", &attributes.object_class),
            ("objectIdentifier", &attributes.object_identifier),
            ("groupName", &attributes.group_name),
            ("membership", &attributes.membership),
            ("membershipIdentifier", &attributes.membership_identifier),
        ];
        for (field, value) in required {
            self.require(ctx, field, value.as_deref())?;
        }
        Ok(())
    }

    pub fn check_email_settings(&mut self, ctx: &ValidationContext, settings: &OrgEmailSettings) -> CheckResult {
        self.require(ctx, "isDefaultSmtpServer", settings.is_default_smtp_server.as_ref())?;
        self.require(ctx, "isDefaultOrgEmail", settings.is_default_org_email.as_ref())?;
        if let Some(address) = self.require(ctx, "fromEmailAddress", settings.from_email_address.as_deref())? {
            self.apply(ctx, "fromEmailAddress", check_email_address(address))?;
        }
        self.require(ctx, "defaultSubjectPrefix", settings.default_subject_prefix.as_deref())?;
        self.require(ctx, "isAlertEmailToAllAdmins", settings.is_alert_email_to_all_admins.as_ref())?;

        self.check_resource(ctx, &settings.resource)
    }

    pub fn check_password_policy(
        &mut self,
        ctx: &ValidationContext,
        settings: &OrgPasswordPolicySettings,
    ) -> CheckResult {
        self.require(ctx, "isAccountLockoutEnabled", settings.is_account_lockout_enabled.as_ref())?;
        self.required_non_negative(
            ctx,
            "invalidLoginsBeforeLockout",
            settings.invalid_logins_before_lockout.as_ref(),
        )?;
        self.required_non_negative(
            ctx,
            "accountLockoutIntervalMinutes",
            settings.account_lockout_interval_minutes.as_ref(),
        )?;

        self.check_resource(ctx, &settings.resource)
    }
}
