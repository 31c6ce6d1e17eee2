//! Build and prerelease version resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resources::Resource;

/// A processed binary uploaded for an app.
pub type Build = Resource<BuildAttributes>;

/// Attributes of a [`Build`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BuildAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_os_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uses_non_exempt_encryption: Option<bool>,
}

/// The train a build belongs to (e.g., `1.2` on `IOS`).
pub type PrereleaseVersion = Resource<PrereleaseVersionAttributes>;

/// Attributes of a [`PrereleaseVersion`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PrereleaseVersionAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// TestFlight distribution state of one build.
pub type BuildBetaDetail = Resource<BuildBetaDetailAttributes>;

/// Attributes of a [`BuildBetaDetail`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BuildBetaDetailAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_notify_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_build_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_build_state: Option<String>,
}
