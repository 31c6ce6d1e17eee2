//! HTTP client functionality for the App Store Connect API.
//!
//! [`ConnectClient`] wraps a `reqwest` client with the signed-token auth
//! transport and the generic request pipeline every endpoint call rides on.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{ApiError, ErrorDetail, HttpError, InvalidHttpRequestError};
pub use http_client::{ConnectClient, DEFAULT_BASE_URI, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
