//! Users and groups
//!
//! Copyright (c) 2025 vcloud-checks contributors
//! Licensed under the Apache-2.0 license

use super::{Entity, Reference};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(flatten)]
    pub entity: Entity,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub im: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_in_source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_alert_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_email_prefix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_external: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default_cached: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_group_role: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored_vm_quota: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployed_vm_quota: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<Reference>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(flatten)]
    pub entity: Entity,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_in_source: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users_list: Vec<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Reference>,
}
