//! Integration tests for the chunked upload engine.
//!
//! These tests run the engine against a local mock server and verify exact
//! byte-range delivery, header forwarding, concurrency of chunk
//! transmissions, and the first-error-wins failure policy.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use appstore_connect::upload::{
    UploadEngine, UploadError, UploadOperation, UploadOperationHeader,
};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Writes a temp file with the given content and returns its path.
fn temp_file(name: &str, content: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("asc-upload-{}-{name}", std::process::id()));
    std::fs::write(&path, content).unwrap();
    path
}

fn put_operation(url: String, offset: u64, length: u64) -> UploadOperation {
    UploadOperation {
        method: "PUT".to_string(),
        url,
        offset,
        length,
        request_headers: Vec::new(),
    }
}

// ============================================================================
// Chunk Delivery Tests
// ============================================================================

#[tokio::test]
async fn test_each_chunk_delivers_its_exact_byte_range() {
    let server = MockServer::start().await;
    let file = temp_file("ranges.bin", b"ABCDEFGHIJKLMNOPQRSTUVWXYZ");

    Mock::given(method("PUT"))
        .and(path("/chunk/0"))
        .and(body_string("ABCDEFGHIJ"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/chunk/1"))
        .and(body_string("KLMNOPQRST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/chunk/2"))
        .and(body_string("UVWXYZ"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let operations = vec![
        put_operation(format!("{}/chunk/0", server.uri()), 0, 10),
        put_operation(format!("{}/chunk/1", server.uri()), 10, 10),
        put_operation(format!("{}/chunk/2", server.uri()), 20, 6),
    ];

    UploadEngine::new().upload(&file, &operations).await.unwrap();
    std::fs::remove_file(&file).ok();
}

#[tokio::test]
async fn test_server_issued_headers_forwarded_with_chunk() {
    let server = MockServer::start().await;
    let file = temp_file("headers.bin", b"payload");

    Mock::given(method("PUT"))
        .and(path("/asset"))
        .and(header("Content-Type", "image/png"))
        .and(header("X-Upload-Part", "1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let operations = vec![UploadOperation {
        method: "PUT".to_string(),
        url: format!("{}/asset", server.uri()),
        offset: 0,
        length: 7,
        request_headers: vec![
            UploadOperationHeader {
                name: "Content-Type".to_string(),
                value: "image/png".to_string(),
            },
            UploadOperationHeader {
                name: "X-Upload-Part".to_string(),
                value: "1".to_string(),
            },
        ],
    }];

    UploadEngine::new().upload(&file, &operations).await.unwrap();
    std::fs::remove_file(&file).ok();
}

#[tokio::test]
async fn test_chunks_transmit_concurrently() {
    let server = MockServer::start().await;
    let file = temp_file("concurrent.bin", &[0_u8; 64]);

    // Each chunk takes 300ms server-side; four in sequence would need
    // 1200ms. Concurrent dispatch finishes in roughly one delay.
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(300)))
        .expect(4)
        .mount(&server)
        .await;

    let operations: Vec<UploadOperation> = (0..4)
        .map(|i| put_operation(format!("{}/chunk/{i}", server.uri()), i * 16, 16))
        .collect();

    let started = Instant::now();
    UploadEngine::new().upload(&file, &operations).await.unwrap();
    let elapsed = started.elapsed();

    assert!(
        elapsed < Duration::from_millis(900),
        "chunks were not transmitted concurrently: took {elapsed:?}"
    );
    std::fs::remove_file(&file).ok();
}

// ============================================================================
// Failure Policy Tests
// ============================================================================

#[tokio::test]
async fn test_non_2xx_chunk_response_is_an_error() {
    let server = MockServer::start().await;
    let file = temp_file("status.bin", b"payload");

    Mock::given(method("PUT"))
        .and(path("/asset"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let operations = vec![put_operation(format!("{}/asset", server.uri()), 0, 7)];

    let result = UploadEngine::new().upload(&file, &operations).await;
    match result {
        Err(UploadError::Status { url, code }) => {
            assert_eq!(code, 403);
            assert!(url.ends_with("/asset"));
        }
        other => panic!("expected UploadError::Status, got {other:?}"),
    }
    std::fs::remove_file(&file).ok();
}

#[tokio::test]
async fn test_out_of_range_chunk_reports_file_size() {
    let server = MockServer::start().await;
    let file = temp_file("range-err.bin", b"tiny");

    let operations = vec![put_operation(format!("{}/asset", server.uri()), 2, 10)];

    let result = UploadEngine::new().upload(&file, &operations).await;
    assert!(matches!(
        result,
        Err(UploadError::ChunkOutOfRange {
            offset: 2,
            length: 10,
            file_size: 4,
        })
    ));
    std::fs::remove_file(&file).ok();
}

#[tokio::test]
async fn test_first_error_wins_and_siblings_still_complete() {
    let server = MockServer::start().await;
    let file = temp_file("first-error.bin", b"0123456789");

    // The healthy chunk must still arrive even though its sibling fails;
    // expect(1) verifies nothing was cancelled.
    Mock::given(method("PUT"))
        .and(path("/healthy"))
        .and(body_string("56789"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(100)))
        .expect(1)
        .mount(&server)
        .await;

    let operations = vec![
        // Fails range validation before any bytes move.
        put_operation(format!("{}/bad", server.uri()), 0, 999),
        put_operation(format!("{}/healthy", server.uri()), 5, 5),
    ];

    let result = UploadEngine::new().upload(&file, &operations).await;
    assert!(matches!(result, Err(UploadError::ChunkOutOfRange { .. })));

    // Dropping the server verifies the expect(1) on the healthy chunk.
    drop(server);
    std::fs::remove_file(&file).ok();
}

#[tokio::test]
async fn test_transport_failure_names_target_url() {
    // Nothing listens on this port; the connection is refused.
    let file = temp_file("transport.bin", b"payload");

    let operations = vec![put_operation("http://127.0.0.1:9/asset".to_string(), 0, 7)];

    let result = UploadEngine::new().upload(&file, &operations).await;
    match result {
        Err(UploadError::Transmit { url, .. }) => {
            assert_eq!(url, "http://127.0.0.1:9/asset");
        }
        other => panic!("expected UploadError::Transmit, got {other:?}"),
    }
    std::fs::remove_file(&file).ok();
}
