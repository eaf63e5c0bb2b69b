//! Access control parameters
//!
//! Copyright (c) 2025 vcloud-checks contributors
//! Licensed under the Apache-2.0 license

use super::Reference;
use serde::{Deserialize, Serialize};

/// Sharing settings of a catalog or vApp
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlAccessParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_shared_to_everyone: Option<bool>,

    /// Only meaningful when shared to everyone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub everyone_access_level: Option<String>,

    /// Required when not shared to everyone; an empty list is valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_settings: Option<Vec<AccessSetting>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessSetting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_level: Option<String>,
}
