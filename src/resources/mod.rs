//! Resource envelope, relationship, and pagination types.
//!
//! Every response from the API shares one envelope: a `data` member holding
//! resource objects (`type`/`id`/`attributes`/`relationships`), an optional
//! heterogeneous `included` array, paging `links`, and `meta`. This module
//! provides the envelope types, the cursor-bearing [`Reference`], and the
//! [`IncludedResource`] registry that turns raw `included` elements into
//! typed values.

mod apps;
mod builds;
mod diagnostics;
mod document;
mod included;
mod media;
mod pricing;
mod provisioning;
mod reference;
mod relationships;
mod testflight;
mod users;

pub use apps::{
    App, AppAttributes, AppInfo, AppInfoAttributes, AppStoreVersion, AppStoreVersionAttributes,
    AppStoreVersionLocalization, AppStoreVersionLocalizationAttributes,
};
pub use builds::{
    Build, BuildAttributes, BuildBetaDetail, BuildBetaDetailAttributes, PrereleaseVersion,
    PrereleaseVersionAttributes,
};
pub use diagnostics::{
    DiagnosticSignature, DiagnosticSignatureAttributes, PerfPowerMetric, PerfPowerMetricAttributes,
};
pub use document::{Document, DocumentLinks, DocumentMeta, PagingMeta, Resource, ResourceLinks};
pub use included::{DecodeError, IncludedResource};
pub use media::{
    AppMediaAssetState, AppPreview, AppPreviewAttributes, AppPreviewSet, AppPreviewSetAttributes,
    AppScreenshot, AppScreenshotAttributes, AppScreenshotSet, AppScreenshotSetAttributes,
    AppStoreReviewAttachment, AppStoreReviewAttachmentAttributes, RoutingAppCoverage,
    RoutingAppCoverageAttributes,
};
pub use pricing::{AppPricePoint, AppPricePointAttributes, Territory, TerritoryAttributes};
pub use provisioning::{
    BundleId, BundleIdAttributes, BundleIdCapability, BundleIdCapabilityAttributes, Certificate,
    CertificateAttributes, Device, DeviceAttributes, Profile, ProfileAttributes,
};
pub use reference::{Reference, ReferenceError};
pub use relationships::{Linkage, LinkageData, Relationship, RelationshipLinks, Relationships};
pub use testflight::{
    BetaAppLocalization, BetaAppLocalizationAttributes, BetaAppReviewDetail,
    BetaAppReviewDetailAttributes, BetaBuildLocalization, BetaBuildLocalizationAttributes,
    BetaGroup, BetaGroupAttributes, BetaTester, BetaTesterAttributes,
};
pub use users::{User, UserAttributes, UserInvitation, UserInvitationAttributes};
