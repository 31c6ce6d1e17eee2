//! Authentication for the App Store Connect API.
//!
//! The API accepts a short-lived ES256-signed bearer token on every request.
//! [`TokenSource`] owns the signing key and the token cache;
//! [`ConnectClient`](crate::clients::ConnectClient) asks it for the current
//! token before each outgoing request and attaches it as an
//! `Authorization: Bearer` header.

mod error;
mod token_source;

pub use error::TokenError;
pub use token_source::TokenSource;
