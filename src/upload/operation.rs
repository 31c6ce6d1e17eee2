//! Server-issued upload operation descriptors.

use serde::{Deserialize, Serialize};

/// One header the server requires on a chunk's upload request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadOperationHeader {
    /// Header name.
    pub name: String,
    /// Header value.
    pub value: String,
}

/// A server-issued descriptor of one byte-range chunk of a multi-part upload.
///
/// Returned embedded in the attributes of a resource representing a pending
/// binary asset (screenshot, preview, routing coverage file, review
/// attachment). Each operation is immutable and consumed exactly once by the
/// [`UploadEngine`](crate::upload::UploadEngine).
///
/// The server does not guarantee that `offset + length` stays within the
/// local file; an out-of-range read fails the upload at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadOperation {
    /// The HTTP verb to use for this chunk (e.g., `PUT`).
    pub method: String,
    /// The absolute target URL for this chunk.
    pub url: String,
    /// Byte position of the chunk within the source file.
    pub offset: u64,
    /// Number of bytes to read and transmit.
    pub length: u64,
    /// Headers to set on the request, in server order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub request_headers: Vec<UploadOperationHeader>,
}
