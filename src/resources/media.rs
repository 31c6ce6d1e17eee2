//! Screenshot, preview, and other binary asset resources.
//!
//! A freshly reserved asset resource carries `upload_operations` describing
//! the byte-range requests the caller must perform to deliver the file; the
//! [`upload`](crate::upload) module consumes those operations.

use serde::{Deserialize, Serialize};

use crate::resources::Resource;
use crate::upload::UploadOperation;

/// Delivery state of an uploaded asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppMediaAssetState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<serde_json::Value>,
}

/// One screenshot of an app.
pub type AppScreenshot = Resource<AppScreenshotAttributes>;

/// Attributes of an [`AppScreenshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppScreenshotAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file_checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_operations: Option<Vec<UploadOperation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_delivery_state: Option<AppMediaAssetState>,
}

/// The ordered screenshots for one display type.
pub type AppScreenshotSet = Resource<AppScreenshotSetAttributes>;

/// Attributes of an [`AppScreenshotSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppScreenshotSetAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot_display_type: Option<String>,
}

/// One video preview of an app.
pub type AppPreview = Resource<AppPreviewAttributes>;

/// Attributes of an [`AppPreview`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppPreviewAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file_checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_frame_time_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_operations: Option<Vec<UploadOperation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_delivery_state: Option<AppMediaAssetState>,
}

/// The ordered previews for one preview type.
pub type AppPreviewSet = Resource<AppPreviewSetAttributes>;

/// Attributes of an [`AppPreviewSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppPreviewSetAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_type: Option<String>,
}

/// The routing coverage file of an app.
pub type RoutingAppCoverage = Resource<RoutingAppCoverageAttributes>;

/// Attributes of a [`RoutingAppCoverage`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RoutingAppCoverageAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file_checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_operations: Option<Vec<UploadOperation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_delivery_state: Option<AppMediaAssetState>,
}

/// An attachment supplied for App Store review.
pub type AppStoreReviewAttachment = Resource<AppStoreReviewAttachmentAttributes>;

/// Attributes of an [`AppStoreReviewAttachment`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppStoreReviewAttachmentAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file_checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_operations: Option<Vec<UploadOperation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_delivery_state: Option<AppMediaAssetState>,
}
