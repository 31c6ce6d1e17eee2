//! Error types for API key configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use appstore_connect::{KeyId, ConfigError};
//!
//! let result = KeyId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyKeyId)));
//! ```

use thiserror::Error;

/// Errors that can occur while validating API key configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Key identifier cannot be empty.
    #[error("Key ID cannot be empty. Provide the identifier shown for the key in App Store Connect.")]
    EmptyKeyId,

    /// Issuer identifier cannot be empty.
    #[error("Issuer ID cannot be empty. Provide the issuer shown on the API keys page in App Store Connect.")]
    EmptyIssuerId,

    /// Key identifier contains characters that can never appear in one.
    #[error("Invalid key ID '{key_id}'. Expected an alphanumeric identifier such as '2X9R4HXF34'.")]
    InvalidKeyId {
        /// The invalid key ID that was provided.
        key_id: String,
    },
}
