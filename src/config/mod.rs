//! Validated newtype wrappers for API key configuration.
//!
//! The App Store Connect API authenticates with a signed token built from a
//! key identifier and an issuer identifier. Both are wrapped in newtypes that
//! validate their contents on construction, so an empty or malformed value is
//! rejected before it can reach the signing path.

use crate::error::ConfigError;
use std::fmt;

/// A validated App Store Connect API key identifier.
///
/// The key ID is the short alphanumeric identifier shown next to a key on the
/// App Store Connect "Users and Access" page (e.g., `2X9R4HXF34`). It is
/// embedded in the `kid` header of every signed token.
///
/// # Example
///
/// ```rust
/// use appstore_connect::KeyId;
///
/// let key_id = KeyId::new("2X9R4HXF34").unwrap();
/// assert_eq!(key_id.as_ref(), "2X9R4HXF34");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyId(String);

impl KeyId {
    /// Creates a new validated key identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyKeyId`] if the value is empty, or
    /// [`ConfigError::InvalidKeyId`] if it contains characters that can
    /// never appear in a key identifier.
    pub fn new(key_id: impl Into<String>) -> Result<Self, ConfigError> {
        let key_id = key_id.into();
        if key_id.is_empty() {
            return Err(ConfigError::EmptyKeyId);
        }
        if !key_id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::InvalidKeyId { key_id });
        }
        Ok(Self(key_id))
    }
}

impl AsRef<str> for KeyId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated App Store Connect issuer identifier.
///
/// The issuer ID identifies the team that owns the API key and becomes the
/// `iss` claim of every signed token. App Store Connect displays it as a
/// UUID, but the service only requires it to be non-empty, so no UUID shape
/// is enforced here.
///
/// # Example
///
/// ```rust
/// use appstore_connect::IssuerId;
///
/// let issuer = IssuerId::new("57246542-96fe-1a63-e053-0824d011072a").unwrap();
/// assert_eq!(issuer.as_ref(), "57246542-96fe-1a63-e053-0824d011072a");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IssuerId(String);

impl IssuerId {
    /// Creates a new validated issuer identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyIssuerId`] if the value is empty.
    pub fn new(issuer_id: impl Into<String>) -> Result<Self, ConfigError> {
        let issuer_id = issuer_id.into();
        if issuer_id.is_empty() {
            return Err(ConfigError::EmptyIssuerId);
        }
        Ok(Self(issuer_id))
    }
}

impl AsRef<str> for IssuerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IssuerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
