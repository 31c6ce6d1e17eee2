//! URL references carried by paged responses.
//!
//! List responses link to themselves and to neighbouring pages through
//! absolute URLs. [`Reference`] wraps one of those URLs and projects the
//! opaque `cursor` query parameter used for pagination.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use url::Url;

/// Error returned when a reference URL cannot be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Malformed reference URL '{url}': {reason}")]
pub struct ReferenceError {
    /// The URL string that failed to parse.
    pub url: String,
    /// The underlying parse failure.
    pub reason: String,
}

/// A reference to an API URL, usually found in a paging link.
///
/// The original URL string is retained verbatim, so serializing a decoded
/// reference reproduces exactly the bytes the server sent. A non-empty string
/// that is not a valid absolute URL fails at decode time; an empty string is
/// a valid reference with no cursor.
///
/// # Example
///
/// ```rust
/// use appstore_connect::resources::Reference;
///
/// let next = Reference::parse("https://api.appstoreconnect.apple.com/v1/apps?cursor=AoJ4").unwrap();
/// assert_eq!(next.cursor(), "AoJ4");
///
/// let last = Reference::parse("https://api.appstoreconnect.apple.com/v1/apps").unwrap();
/// assert_eq!(last.cursor(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    raw: String,
}

impl Reference {
    /// Parses a reference from a URL string.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError`] if the string is non-empty and not a valid
    /// absolute URL.
    pub fn parse(url: impl Into<String>) -> Result<Self, ReferenceError> {
        let raw = url.into();
        if !raw.is_empty() {
            Url::parse(&raw).map_err(|e| ReferenceError {
                url: raw.clone(),
                reason: e.to_string(),
            })?;
        }
        Ok(Self { raw })
    }

    /// Returns the opaque continuation token from the URL's query string.
    ///
    /// Yields an empty string when the URL carries no `cursor` parameter,
    /// signalling that no further pages exist.
    #[must_use]
    pub fn cursor(&self) -> String {
        Url::parse(&self.raw)
            .ok()
            .and_then(|url| {
                url.query_pairs()
                    .find(|(key, _)| key == "cursor")
                    .map(|(_, value)| value.into_owned())
            })
            .unwrap_or_default()
    }

    /// Returns the original URL string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl Serialize for Reference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Reference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(raw).map_err(de::Error::custom)
    }
}
