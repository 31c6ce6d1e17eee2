//! Power, performance, and diagnostics resources.

use serde::{Deserialize, Serialize};

use crate::resources::Resource;

/// A cluster of diagnostic reports sharing one signature.
pub type DiagnosticSignature = Resource<DiagnosticSignatureAttributes>;

/// Attributes of a [`DiagnosticSignature`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticSignatureAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// Aggregated power/performance metrics for one device class.
pub type PerfPowerMetric = Resource<PerfPowerMetricAttributes>;

/// Attributes of a [`PerfPowerMetric`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PerfPowerMetricAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}
