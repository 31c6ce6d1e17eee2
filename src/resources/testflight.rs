//! TestFlight beta testing resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resources::Resource;

/// A group of beta testers.
pub type BetaGroup = Resource<BetaGroupAttributes>;

/// Attributes of a [`BetaGroup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BetaGroupAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_internal_group: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_link_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_link_limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
}

/// A person invited to test builds.
pub type BetaTester = Resource<BetaTesterAttributes>;

/// Attributes of a [`BetaTester`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BetaTesterAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_type: Option<String>,
}

/// Localized TestFlight app metadata.
pub type BetaAppLocalization = Resource<BetaAppLocalizationAttributes>;

/// Attributes of a [`BetaAppLocalization`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BetaAppLocalizationAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_policy_url: Option<String>,
}

/// Localized "what to test" notes for one build.
pub type BetaBuildLocalization = Resource<BetaBuildLocalizationAttributes>;

/// Attributes of a [`BetaBuildLocalization`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BetaBuildLocalizationAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whats_new: Option<String>,
}

/// Contact details for beta app review.
pub type BetaAppReviewDetail = Resource<BetaAppReviewDetailAttributes>;

/// Attributes of a [`BetaAppReviewDetail`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BetaAppReviewDetailAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_account_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_account_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
