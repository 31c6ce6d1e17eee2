//! Pricing and territory resources.

use serde::{Deserialize, Serialize};

use crate::resources::Resource;

/// An App Store territory.
pub type Territory = Resource<TerritoryAttributes>;

/// Attributes of a [`Territory`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TerritoryAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// A price point in one territory.
pub type AppPricePoint = Resource<AppPricePointAttributes>;

/// Attributes of an [`AppPricePoint`].
///
/// Prices are decimal strings on the wire (e.g., `"0.99"`); they are not
/// converted to a numeric type here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppPricePointAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proceeds: Option<String>,
}
