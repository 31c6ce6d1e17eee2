//! Error types for signed-token authentication.

use thiserror::Error;

/// Errors that can occur while constructing a token source or signing a token.
///
/// Construction errors ([`TokenError::InvalidPrivateKey`],
/// [`TokenError::InvalidValidity`]) are fatal: no partially-usable token
/// source exists after one is returned. Signing errors surface per call from
/// [`TokenSource::token`](crate::auth::TokenSource::token); there is no
/// fallback credential.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The private key material could not be parsed.
    ///
    /// The key must be a PEM-encoded PKCS#8 (or SEC1) elliptic-curve private
    /// key on the P-256 curve, as issued by App Store Connect.
    #[error("Invalid private key: {source}. Expected a PEM-encoded PKCS#8 elliptic-curve key suitable for ES256.")]
    InvalidPrivateKey {
        /// The underlying parse failure.
        source: jsonwebtoken::errors::Error,
    },

    /// The requested validity duration cannot be represented.
    #[error("Invalid token validity duration: {reason}")]
    InvalidValidity {
        /// Why the duration was rejected.
        reason: String,
    },

    /// Signing the token failed.
    #[error("Failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}
