//! App resources and their App Store versions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resources::Resource;

/// An app registered on App Store Connect.
pub type App = Resource<AppAttributes>;

/// Attributes of an [`App`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_locale: Option<String>,
}

/// App-level App Store metadata state.
pub type AppInfo = Resource<AppInfoAttributes>;

/// Attributes of an [`AppInfo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppInfoAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_store_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_store_age_rating: Option<String>,
}

/// One version of an app on the App Store.
pub type AppStoreVersion = Resource<AppStoreVersionAttributes>;

/// Attributes of an [`AppStoreVersion`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppStoreVersionAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_store_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
}

/// Localized App Store metadata for one version.
pub type AppStoreVersionLocalization = Resource<AppStoreVersionLocalizationAttributes>;

/// Attributes of an [`AppStoreVersionLocalization`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppStoreVersionLocalizationAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotional_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whats_new: Option<String>,
}
