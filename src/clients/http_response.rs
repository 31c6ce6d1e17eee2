//! HTTP response types for the API client.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// Response header carrying the service's correlation key.
const CORRELATION_KEY_HEADER: &str = "x-apple-jingle-correlation-key";

/// A parsed HTTP response from the API.
///
/// The body is held as raw JSON; [`json`](Self::json) deserializes it into a
/// typed document on demand.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed JSON body, `{}` when the response had none.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code indicates success (2xx).
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Returns the service's correlation key for this response, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get(CORRELATION_KEY_HEADER)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Deserializes the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error if the body does not match
    /// `T`, including a malformed paging link or `included` element.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.body.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_for_2xx_only() {
        let ok = HttpResponse::new(201, HashMap::new(), json!({}));
        assert!(ok.is_ok());

        let unauthorized = HttpResponse::new(401, HashMap::new(), json!({}));
        assert!(!unauthorized.is_ok());

        let redirect = HttpResponse::new(301, HashMap::new(), json!({}));
        assert!(!redirect.is_ok());
    }

    #[test]
    fn test_request_id_from_correlation_header() {
        let mut headers = HashMap::new();
        headers.insert(
            CORRELATION_KEY_HEADER.to_string(),
            vec!["ABCDEF-12345".to_string()],
        );
        let response = HttpResponse::new(200, headers, json!({}));
        assert_eq!(response.request_id(), Some("ABCDEF-12345"));
    }

    #[test]
    fn test_request_id_absent() {
        let response = HttpResponse::new(200, HashMap::new(), json!({}));
        assert_eq!(response.request_id(), None);
    }

    #[test]
    fn test_json_deserializes_body() {
        let response = HttpResponse::new(200, HashMap::new(), json!({"data": {"type": "apps", "id": "1"}}));
        let document: crate::resources::Document<crate::resources::App> =
            response.json().unwrap();
        assert_eq!(document.data.id, "1");
    }
}
