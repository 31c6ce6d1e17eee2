//! HTTP-specific error types.
//!
//! The client maps failures onto a small taxonomy:
//!
//! - [`ApiError`]: a non-2xx response carrying the service's error envelope
//! - [`InvalidHttpRequestError`]: a request that fails validation before sending
//! - [`HttpError`]: unified error type encompassing all request-path errors

use serde::Deserialize;
use thiserror::Error;

use crate::auth::TokenError;

/// One error object from the service's error envelope.
///
/// Non-2xx responses carry `{ "errors": [ ... ] }` with one entry per
/// problem the service found.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct ErrorDetail {
    /// Service-assigned identifier for this occurrence.
    #[serde(default)]
    pub id: Option<String>,
    /// The HTTP status, as a string.
    #[serde(default)]
    pub status: Option<String>,
    /// Machine-readable error code (e.g., `NOT_FOUND`).
    #[serde(default)]
    pub code: Option<String>,
    /// Short human-readable summary.
    #[serde(default)]
    pub title: Option<String>,
    /// Longer human-readable explanation.
    #[serde(default)]
    pub detail: Option<String>,
}

/// Error returned when the service answers with a non-2xx status.
///
/// Authentication rejections (401/403) surface through this type unchanged;
/// the client never retries them.
#[derive(Debug, Error)]
#[error("API request failed with status {code}: {}", summary(.errors))]
pub struct ApiError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Error objects from the response envelope, empty if the body carried
    /// none.
    pub errors: Vec<ErrorDetail>,
    /// Correlation key for support requests, from the
    /// `X-Apple-Jingle-Correlation-Key` header.
    pub request_id: Option<String>,
}

/// Formats the first error object for the `Display` impl.
fn summary(errors: &[ErrorDetail]) -> String {
    errors.first().map_or_else(
        || "no error detail provided".to_string(),
        |e| {
            let title = e.title.as_deref().unwrap_or("unknown error");
            e.detail
                .as_deref()
                .map_or_else(|| title.to_string(), |detail| format!("{title} - {detail}"))
        },
    )
}

/// Error returned when an HTTP request fails validation before sending.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PATCH request was built without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all request-path errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The bearer token could not be produced.
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The response body did not match the expected shape.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}
