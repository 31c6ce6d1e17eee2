//! Polymorphic decoding of `included` resources.
//!
//! Responses can embed related resources of heterogeneous kinds in a
//! top-level `included` array to save the caller extra round trips. The set
//! of kinds grows with the service, so decoding goes through a single closed
//! registry: the element's `type` tag is partial-parsed first, then the full
//! object is decoded into the concrete shape registered for that tag. A tag
//! outside the registry fails the whole decode; there is no best-effort
//! partial result.
//!
//! Adding a new includable kind means adding one line to the
//! [`IncludedResource`] registration below — every consumer of `included`
//! arrays is decoupled from that growth.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::resources::{
    App, AppInfo, AppPreview, AppPreviewSet, AppPricePoint, AppScreenshot, AppScreenshotSet,
    AppStoreReviewAttachment, AppStoreVersion, AppStoreVersionLocalization, BetaAppLocalization,
    BetaAppReviewDetail, BetaBuildLocalization, BetaGroup, BetaTester, Build, BuildBetaDetail,
    BundleId, BundleIdCapability, Certificate, Device, DiagnosticSignature, PerfPowerMetric,
    PrereleaseVersion, Profile, RoutingAppCoverage, Territory, User, UserInvitation,
};

/// Errors that can occur while decoding an `included` element.
///
/// Any of these fails the decode of the enclosing collection.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The element has no `type` field, or its value is not a string.
    #[error("Included resource is missing a string 'type' field")]
    MissingTypeTag,

    /// The type tag is not in the registry of includable kinds.
    #[error("Type '{tag}' not recognized as includable")]
    NotIncludable {
        /// The unrecognized tag.
        tag: String,
    },

    /// The element's body did not match the registered shape for its tag.
    #[error("Failed to decode included '{tag}' resource: {source}")]
    Json {
        /// The tag whose shape failed to decode.
        tag: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

macro_rules! includable_resources {
    ($( $tag:literal => $variant:ident($ty:ty) via $accessor:ident; )+) => {
        /// One resource from an `included` array, decoded into its concrete
        /// kind.
        ///
        /// Consumers probe a heterogeneous array by calling the accessor for
        /// the kind they want; a mismatched kind yields `None` rather than an
        /// error, so "the first `App`, if present" needs no type-switch
        /// boilerplate at the call site.
        ///
        /// # Example
        ///
        /// ```rust
        /// use appstore_connect::resources::IncludedResource;
        /// use serde_json::json;
        ///
        /// let raw = json!({"type": "betaGroups", "id": "bg-1"});
        /// let included = IncludedResource::decode(&raw).unwrap();
        ///
        /// assert!(included.beta_group().is_some());
        /// assert!(included.app().is_none());
        /// ```
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum IncludedResource {
            $(
                #[doc = concat!("A resource with type tag `", $tag, "`.")]
                $variant($ty),
            )+
        }

        impl IncludedResource {
            /// Every wire type tag in the registry.
            pub const TYPES: &'static [&'static str] = &[$( $tag, )+];

            /// Decodes one raw `included` element.
            ///
            /// The `type` field is inspected first; the full object is then
            /// decoded into the shape registered for that tag.
            ///
            /// # Errors
            ///
            /// Returns [`DecodeError::MissingTypeTag`] when `type` is absent
            /// or not a string, [`DecodeError::NotIncludable`] for a tag
            /// outside the registry, and [`DecodeError::Json`] when the body
            /// does not match the registered shape.
            pub fn decode(raw: &Value) -> Result<Self, DecodeError> {
                let tag = raw
                    .get("type")
                    .and_then(Value::as_str)
                    .ok_or(DecodeError::MissingTypeTag)?;
                match tag {
                    $(
                        $tag => serde_json::from_value(raw.clone())
                            .map(Self::$variant)
                            .map_err(|source| DecodeError::Json {
                                tag: tag.to_string(),
                                source,
                            }),
                    )+
                    _ => Err(DecodeError::NotIncludable {
                        tag: tag.to_string(),
                    }),
                }
            }

            /// Returns the wire type tag of the decoded resource.
            #[must_use]
            pub const fn resource_type(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => $tag, )+
                }
            }

            $(
                #[doc = concat!("Returns the resource if its kind is `", $tag, "`, `None` otherwise.")]
                #[must_use]
                pub fn $accessor(&self) -> Option<&$ty> {
                    match self {
                        Self::$variant(resource) => Some(resource),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    }
                }
            )+
        }
    };
}

includable_resources! {
    "apps" => App(App) via app;
    "appInfos" => AppInfo(AppInfo) via app_info;
    "appStoreVersions" => AppStoreVersion(AppStoreVersion) via app_store_version;
    "appStoreVersionLocalizations" => AppStoreVersionLocalization(AppStoreVersionLocalization) via app_store_version_localization;
    "builds" => Build(Build) via build;
    "preReleaseVersions" => PrereleaseVersion(PrereleaseVersion) via prerelease_version;
    "buildBetaDetails" => BuildBetaDetail(BuildBetaDetail) via build_beta_detail;
    "betaGroups" => BetaGroup(BetaGroup) via beta_group;
    "betaTesters" => BetaTester(BetaTester) via beta_tester;
    "betaAppLocalizations" => BetaAppLocalization(BetaAppLocalization) via beta_app_localization;
    "betaBuildLocalizations" => BetaBuildLocalization(BetaBuildLocalization) via beta_build_localization;
    "betaAppReviewDetails" => BetaAppReviewDetail(BetaAppReviewDetail) via beta_app_review_detail;
    "certificates" => Certificate(Certificate) via certificate;
    "devices" => Device(Device) via device;
    "bundleIds" => BundleId(BundleId) via bundle_id;
    "bundleIdCapabilities" => BundleIdCapability(BundleIdCapability) via bundle_id_capability;
    "profiles" => Profile(Profile) via profile;
    "territories" => Territory(Territory) via territory;
    "appPricePoints" => AppPricePoint(AppPricePoint) via app_price_point;
    "users" => User(User) via user;
    "userInvitations" => UserInvitation(UserInvitation) via user_invitation;
    "diagnosticSignatures" => DiagnosticSignature(DiagnosticSignature) via diagnostic_signature;
    "perfPowerMetrics" => PerfPowerMetric(PerfPowerMetric) via perf_power_metric;
    "appScreenshots" => AppScreenshot(AppScreenshot) via app_screenshot;
    "appScreenshotSets" => AppScreenshotSet(AppScreenshotSet) via app_screenshot_set;
    "appPreviews" => AppPreview(AppPreview) via app_preview;
    "appPreviewSets" => AppPreviewSet(AppPreviewSet) via app_preview_set;
    "routingAppCoverages" => RoutingAppCoverage(RoutingAppCoverage) via routing_app_coverage;
    "appStoreReviewAttachments" => AppStoreReviewAttachment(AppStoreReviewAttachment) via app_store_review_attachment;
}

impl<'de> Deserialize<'de> for IncludedResource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Self::decode(&raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_registered_tag_decodes_minimal_object() {
        for tag in IncludedResource::TYPES {
            let raw = json!({"type": tag, "id": "x"});
            let included = IncludedResource::decode(&raw)
                .unwrap_or_else(|e| panic!("tag '{tag}' failed to decode: {e}"));
            assert_eq!(included.resource_type(), *tag);
        }
    }

    #[test]
    fn test_accessor_matches_only_its_own_kind() {
        let raw = json!({"type": "apps", "id": "x"});
        let included = IncludedResource::decode(&raw).unwrap();

        assert!(included.app().is_some());
        assert!(included.build().is_none());
        assert!(included.beta_group().is_none());
        assert!(included.profile().is_none());
    }

    #[test]
    fn test_unknown_tag_fails() {
        let raw = json!({"type": "unknown-kind", "id": "x"});
        let result = IncludedResource::decode(&raw);
        assert!(matches!(
            result,
            Err(DecodeError::NotIncludable { tag }) if tag == "unknown-kind"
        ));
    }

    #[test]
    fn test_non_string_tag_fails() {
        let raw = json!({"type": -1, "id": "x"});
        assert!(matches!(
            IncludedResource::decode(&raw),
            Err(DecodeError::MissingTypeTag)
        ));
    }

    #[test]
    fn test_missing_tag_fails() {
        let raw = json!({"id": "x"});
        assert!(matches!(
            IncludedResource::decode(&raw),
            Err(DecodeError::MissingTypeTag)
        ));
    }

    #[test]
    fn test_malformed_body_for_known_tag_fails() {
        // attributes must be an object, not a number
        let raw = json!({"type": "apps", "id": "x", "attributes": 7});
        assert!(matches!(
            IncludedResource::decode(&raw),
            Err(DecodeError::Json { tag, .. }) if tag == "apps"
        ));
    }

    #[test]
    fn test_one_bad_element_fails_whole_array_decode() {
        let json = r#"[
            {"type": "apps", "id": "1"},
            {"type": "unknown-kind", "id": "2"}
        ]"#;
        let result: Result<Vec<IncludedResource>, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_decoded_attributes_are_typed() {
        let raw = json!({
            "type": "builds",
            "id": "b-1",
            "attributes": {"version": "42", "processingState": "VALID"}
        });
        let included = IncludedResource::decode(&raw).unwrap();
        let build = included.build().unwrap();
        let attributes = build.attributes.as_ref().unwrap();
        assert_eq!(attributes.version.as_deref(), Some("42"));
    }

    #[test]
    fn test_serialize_round_trips_envelope() {
        let raw = json!({"type": "territories", "id": "USA", "attributes": {"currency": "USD"}});
        let included = IncludedResource::decode(&raw).unwrap();
        let back = serde_json::to_value(&included).unwrap();
        assert_eq!(back, raw);
    }
}
