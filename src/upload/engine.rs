//! Concurrent chunked upload engine.
//!
//! The service describes a multi-part binary upload as a list of
//! [`UploadOperation`]s, each naming a byte range of the local file and a
//! target URL. The engine reads each range with a positioned read from one
//! shared read-only file handle and transmits every chunk concurrently,
//! joining on all of them before returning.
//!
//! # Failure policy
//!
//! The first error observed (read or transmit) is returned once every chunk
//! has completed or failed. Sibling transmissions are not cancelled when one
//! fails, and errors after the first are discarded. A non-2xx response is
//! treated the same as a transport failure. There is no per-chunk retry, no
//! resumability across calls, and no timeout propagation; the caller tells
//! the service the upload is complete after this returns `Ok`.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use reqwest::Method;
use thiserror::Error;

use crate::upload::UploadOperation;

/// Errors that can occur during a chunked upload.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The source file could not be opened or inspected.
    #[error("Failed to open '{path}': {source}")]
    Open {
        /// The file that failed to open.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An operation's byte range extends past the end of the source file.
    #[error("Chunk at offset {offset} (length {length}) exceeds file size {file_size}")]
    ChunkOutOfRange {
        /// Byte offset of the offending chunk.
        offset: u64,
        /// Length of the offending chunk.
        length: u64,
        /// Actual size of the source file.
        file_size: u64,
    },

    /// Reading a chunk from the source file failed.
    #[error("Failed to read chunk at offset {offset} (length {length}): {source}")]
    Read {
        /// Byte offset of the chunk.
        offset: u64,
        /// Length of the chunk.
        length: u64,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An operation carries an HTTP method the client cannot send.
    #[error("Invalid HTTP method '{method}' in upload operation")]
    InvalidMethod {
        /// The method string from the operation.
        method: String,
    },

    /// Transmitting a chunk failed at the transport level.
    #[error("Failed to transmit chunk to {url}: {source}")]
    Transmit {
        /// The chunk's target URL.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered a chunk request with a non-2xx status.
    #[error("Chunk upload to {url} returned HTTP {code}")]
    Status {
        /// The chunk's target URL.
        url: String,
        /// The response status code.
        code: u16,
    },

    /// An upload task panicked or was aborted by the runtime.
    #[error("Upload task failed to complete: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Uploads a local file in server-described chunks, one concurrent
/// transmission per operation.
///
/// # Thread Safety
///
/// `UploadEngine` is `Send + Sync` and cheap to clone; it shares one
/// `reqwest::Client` connection pool across uploads.
///
/// # Example
///
/// ```rust,ignore
/// use appstore_connect::upload::UploadEngine;
///
/// // operations come from a reserved asset's `uploadOperations` attribute
/// let engine = UploadEngine::new();
/// engine.upload("screenshots/iphone65-1.png", &operations).await?;
/// // then PATCH the asset with `uploaded: true` to commit
/// ```
#[derive(Debug, Clone, Default)]
pub struct UploadEngine {
    client: reqwest::Client,
}

// Verify UploadEngine is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<UploadEngine>();
};

impl UploadEngine {
    /// Creates a new upload engine with a default HTTP client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an upload engine that transmits through the given client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Uploads the byte ranges described by `operations` from the file at
    /// `path`.
    ///
    /// The file is opened once, read-only, and shared across all chunk
    /// readers; each range is read with a positioned read, never through a
    /// shared seek cursor. All transmissions run concurrently and are all
    /// awaited before this returns.
    ///
    /// # Errors
    ///
    /// Returns the first [`UploadError`] observed across all chunks; see the
    /// module docs for the failure policy.
    pub async fn upload(
        &self,
        path: impl AsRef<Path>,
        operations: &[UploadOperation],
    ) -> Result<(), UploadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| UploadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let file_size = file
            .metadata()
            .map_err(|source| UploadError::Open {
                path: path.to_path_buf(),
                source,
            })?
            .len();
        let file = Arc::new(file);

        let mut handles = Vec::with_capacity(operations.len());
        for operation in operations.iter().cloned() {
            let client = self.client.clone();
            let file = Arc::clone(&file);
            handles.push(tokio::spawn(transmit_chunk(
                client, file, file_size, operation,
            )));
        }

        // Join barrier: every chunk is awaited even after a failure; the
        // first error observed wins and later ones are discarded.
        let mut first_error = None;
        for handle in handles {
            let result = handle.await.map_err(UploadError::Join).and_then(|r| r);
            if let Err(error) = result {
                if first_error.is_none() {
                    first_error = Some(error);
                }
            }
        }

        first_error.map_or(Ok(()), Err)
    }
}

/// Reads one chunk and transmits it to its target URL.
async fn transmit_chunk(
    client: reqwest::Client,
    file: Arc<File>,
    file_size: u64,
    operation: UploadOperation,
) -> Result<(), UploadError> {
    let UploadOperation {
        method,
        url,
        offset,
        length,
        request_headers,
    } = operation;

    let end = offset.checked_add(length);
    if end.is_none() || end > Some(file_size) {
        return Err(UploadError::ChunkOutOfRange {
            offset,
            length,
            file_size,
        });
    }

    let chunk = tokio::task::spawn_blocking(move || read_chunk(&file, offset, length))
        .await?
        .map_err(|source| UploadError::Read {
            offset,
            length,
            source,
        })?;

    let method = Method::from_bytes(method.as_bytes())
        .map_err(|_| UploadError::InvalidMethod { method })?;

    tracing::debug!(%url, offset, length, "dispatching upload chunk");

    let mut request = client.request(method, &url);
    for header in &request_headers {
        request = request.header(&header.name, &header.value);
    }

    let response = request
        .body(chunk)
        .send()
        .await
        .map_err(|source| UploadError::Transmit {
            url: url.clone(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(UploadError::Status {
            url,
            code: status.as_u16(),
        });
    }

    Ok(())
}

/// Reads exactly `length` bytes at `offset` using a positioned read.
fn read_chunk(file: &File, offset: u64, length: u64) -> io::Result<Vec<u8>> {
    let length = usize::try_from(length)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "chunk length exceeds usize"))?;
    let mut buffer = vec![0_u8; length];

    #[cfg(unix)]
    {
        use std::os::unix::fs::FileExt;
        file.read_exact_at(&mut buffer, offset)?;
    }

    #[cfg(windows)]
    {
        use std::os::windows::fs::FileExt;
        let mut read = 0;
        while read < buffer.len() {
            let n = file.seek_read(&mut buffer[read..], offset + read as u64)?;
            if n == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "chunk extends past end of file",
                ));
            }
            read += n;
        }
    }

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_chunk_returns_exact_range() {
        let path = std::env::temp_dir().join(format!("asc-read-chunk-{}", std::process::id()));
        std::fs::write(&path, b"0123456789").unwrap();
        let file = File::open(&path).unwrap();

        let chunk = read_chunk(&file, 3, 4).unwrap();
        assert_eq!(chunk, b"3456");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_read_chunk_past_end_fails() {
        let path = std::env::temp_dir().join(format!("asc-read-past-{}", std::process::id()));
        std::fs::write(&path, b"short").unwrap();
        let file = File::open(&path).unwrap();

        let result = read_chunk(&file, 3, 10);
        assert!(result.is_err());

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_upload_missing_file_fails_to_open() {
        let engine = UploadEngine::new();
        let result = engine
            .upload("/nonexistent/asc-upload-test.bin", &[])
            .await;
        assert!(matches!(result, Err(UploadError::Open { .. })));
    }

    #[tokio::test]
    async fn test_upload_with_no_operations_succeeds() {
        let path = std::env::temp_dir().join(format!("asc-empty-ops-{}", std::process::id()));
        std::fs::write(&path, b"payload").unwrap();

        let engine = UploadEngine::new();
        let result = engine.upload(&path, &[]).await;
        assert!(result.is_ok());

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_invalid_method_is_rejected() {
        let path = std::env::temp_dir().join(format!("asc-bad-method-{}", std::process::id()));
        std::fs::write(&path, b"payload").unwrap();

        let operations = vec![UploadOperation {
            method: "NOT A METHOD".to_string(),
            url: "https://upload.invalid/asset".to_string(),
            offset: 0,
            length: 7,
            request_headers: Vec::new(),
        }];

        let engine = UploadEngine::new();
        let result = engine.upload(&path, &operations).await;
        assert!(matches!(result, Err(UploadError::InvalidMethod { .. })));

        std::fs::remove_file(&path).ok();
    }
}
