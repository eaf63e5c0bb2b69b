//! Organizations and their administrative settings
//!
//! Copyright (c) 2025 vcloud-checks contributors
//! Licensed under the Apache-2.0 license

use super::{Entity, Reference, Resource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Org {
    #[serde(flatten)]
    pub entity: Entity,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
}

/// Administrative view of an organization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOrg {
    #[serde(flatten)]
    pub org: Org,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<OrgSettings>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub catalogs: Vec<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vdcs: Vec<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<Reference>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgSettings {
    #[serde(flatten)]
    pub resource: Resource,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_settings: Option<OrgGeneralSettings>,

    #[serde(rename = "vAppLeaseSettings", skip_serializing_if = "Option::is_none")]
    pub vapp_lease_settings: Option<OrgLeaseSettings>,

    #[serde(rename = "vAppTemplateLeaseSettings", skip_serializing_if = "Option::is_none")]
    pub vapp_template_lease_settings: Option<OrgVAppTemplateLeaseSettings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldap_settings: Option<OrgLdapSettings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_settings: Option<OrgEmailSettings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_policy: Option<OrgPasswordPolicySettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgGeneralSettings {
    #[serde(flatten)]
    pub resource: Resource,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_publish_catalogs: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployed_vm_quota: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored_vm_quota: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_server_boot_sequence: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_after_power_on_seconds: Option<i32>,
}

/// Runtime and storage lease defaults for vApps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgLeaseSettings {
    #[serde(flatten)]
    pub resource: Resource,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_on_storage_lease_expiration: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_lease_seconds: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_lease_seconds: Option<i32>,
}

/// Storage lease defaults for vApp templates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgVAppTemplateLeaseSettings {
    #[serde(flatten)]
    pub resource: Resource,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_on_storage_lease_expiration: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_lease_seconds: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgLdapSettings {
    #[serde(flatten)]
    pub resource: Resource,

    /// One of `NONE`, `SYSTEM`, `CUSTOM`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldap_mode: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_users_ou: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_org_ldap_settings: Option<CustomOrgLdapSettings>,
}

/// Connection details of an organization-specific LDAP server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomOrgLdapSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_ssl: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_ssl_accept_all: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub realm: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_base: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_mechanism: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_group_search_base_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_search_base: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_attributes: Option<OrgLdapUserAttributes>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_attributes: Option<OrgLdapGroupAttributes>,
}

/// LDAP attribute names used to map directory users
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgLdapUserAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_class: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_identifier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_membership_identifier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_back_link_identifier: Option<String>,
}

/// LDAP attribute names used to map directory groups
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgLdapGroupAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_class: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_identifier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership_identifier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_link_identifier: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgEmailSettings {
    #[serde(flatten)]
    pub resource: Resource,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default_smtp_server: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default_org_email: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_email_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_subject_prefix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_alert_email_to_all_admins: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alert_email_to: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgPasswordPolicySettings {
    #[serde(flatten)]
    pub resource: Resource,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_account_lockout_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_logins_before_lockout: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_lockout_interval_minutes: Option<i32>,
}
