//! # App Store Connect Rust SDK
//!
//! A Rust client for the App Store Connect API, providing signed-token
//! authentication, typed resource envelopes, cursor pagination, and
//! concurrent chunked uploads of binary assets.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Validated newtypes for API key configuration ([`KeyId`], [`IssuerId`])
//! - ES256 signed bearer tokens with transparent rotation via [`TokenSource`]
//! - An authenticated async HTTP client, [`ConnectClient`]
//! - Typed response documents with polymorphic `included` decoding via
//!   [`resources::IncludedResource`]
//! - Cursor-based pagination via [`resources::Reference`]
//! - A concurrent chunked upload engine via [`upload::UploadEngine`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use appstore_connect::{ConnectClient, IssuerId, KeyId, TokenSource};
//! use appstore_connect::resources::{App, Document};
//!
//! // Keys come from the App Store Connect "Users and Access" page.
//! let source = TokenSource::new(
//!     KeyId::new("2X9R4HXF34")?,
//!     IssuerId::new("57246542-96fe-1a63-e053-0824d011072a")?,
//!     Duration::from_secs(20 * 60),
//!     std::fs::read("AuthKey_2X9R4HXF34.p8")?,
//! )?;
//!
//! let client = ConnectClient::new(source);
//!
//! // List apps, following cursor pagination.
//! let mut cursor: Option<String> = None;
//! loop {
//!     let mut query = std::collections::HashMap::new();
//!     if let Some(cursor) = &cursor {
//!         query.insert("cursor".to_string(), cursor.clone());
//!     }
//!     let page: Document<Vec<App>> = client.get("v1/apps", Some(query)).await?;
//!     for app in &page.data {
//!         println!("{}", app.id);
//!     }
//!     match page.next_cursor() {
//!         Some(next) => cursor = Some(next),
//!         None => break,
//!     }
//! }
//! ```
//!
//! ## Included Resources
//!
//! Responses requested with `include=` embed related resources of
//! heterogeneous kinds. Each element decodes through a closed type registry;
//! probe for the kind you want with the matching accessor:
//!
//! ```rust,ignore
//! let document: Document<Build> = client
//!     .get("v1/builds/abc", Some(query_with_include))
//!     .await?;
//!
//! for included in document.included() {
//!     if let Some(group) = included.beta_group() {
//!         println!("distributed to {:?}", group.attributes);
//!     }
//! }
//! ```
//!
//! ## Uploading Binary Assets
//!
//! Reserving a screenshot (or preview, routing coverage file, review
//! attachment) returns server-issued upload operations; the engine performs
//! them concurrently, then the caller commits the asset:
//!
//! ```rust,ignore
//! use appstore_connect::upload::UploadEngine;
//!
//! let operations = screenshot
//!     .attributes
//!     .as_ref()
//!     .and_then(|a| a.upload_operations.clone())
//!     .unwrap_or_default();
//!
//! UploadEngine::new().upload("iphone65-1.png", &operations).await?;
//! // then PATCH the screenshot with `uploaded: true` and the checksum
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: newtypes and key material validate on construction
//! - **Thread-safe**: shared types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime
//! - **Errors as values**: no subsystem logs, retries, or swallows errors;
//!   cancellation and deadlines are left to the caller

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;
pub mod upload;

// Re-export public types at crate root for convenience
pub use auth::{TokenError, TokenSource};
pub use clients::{ApiError, ConnectClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
pub use config::{IssuerId, KeyId};
pub use error::ConfigError;
