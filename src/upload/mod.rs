//! Chunked uploads of binary assets.
//!
//! Reserving a binary asset (screenshot, preview, routing coverage file,
//! review attachment) returns a list of [`UploadOperation`]s describing the
//! byte-range requests that deliver the file. [`UploadEngine`] performs them
//! concurrently. Committing the finished upload is a separate resource call
//! and stays outside this module.

mod engine;
mod operation;

pub use engine::{UploadEngine, UploadError};
pub use operation::{UploadOperation, UploadOperationHeader};
