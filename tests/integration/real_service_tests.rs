//! Real service integration tests against MinIO.
//!
//! These tests exercise `S3ObjectStore` and the full HTTP stack against a real
//! S3-compatible service.
//!
//! # Requirements
//!
//! A MinIO server on `localhost:9000` with the default credentials:
//! ```bash
//! docker run -p 9000:9000 minio/minio server /data
//! ```
//!
//! # Running the tests
//!
//! ```bash
//! cargo test --test integration real_service -- --ignored
//! ```
//!
//! They are marked `#[ignore]` because they need the external service.

use std::net::SocketAddr;
use std::time::Duration;

use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;

use photo_proxy::storage::{ObjectStore, S3ObjectStore};
use photo_proxy::{create_router, RouterConfig};

use super::test_utils::{JPEG_BYTES, MANIFEST_JSON};

const MINIO_ENDPOINT: &str = "http://localhost:9000";
const MINIO_BUCKET: &str = "gallery-test";
const MISSING_BUCKET: &str = "no-such-bucket-photo-proxy";

/// MinIO credentials (server defaults)
const MINIO_ACCESS_KEY: &str = "minioadmin";
const MINIO_SECRET_KEY: &str = "minioadmin";

/// Check if the MinIO service is reachable
async fn is_minio_available() -> bool {
    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()
    {
        Ok(c) => c,
        Err(_) => return false,
    };

    client
        .get(format!("{}/minio/health/live", MINIO_ENDPOINT))
        .send()
        .await
        .map(|r| r.status().is_success())
        .unwrap_or(false)
}

/// Create an S3 client configured for MinIO
fn create_minio_client() -> aws_sdk_s3::Client {
    let creds = aws_sdk_s3::config::Credentials::new(
        MINIO_ACCESS_KEY,
        MINIO_SECRET_KEY,
        None,
        None,
        "test",
    );

    let config = aws_sdk_s3::Config::builder()
        .behavior_version_latest()
        .region(aws_sdk_s3::config::Region::new("us-east-1"))
        .endpoint_url(MINIO_ENDPOINT)
        .credentials_provider(creds)
        .force_path_style(true)
        .build();

    aws_sdk_s3::Client::from_conf(config)
}

/// Create the test bucket (if needed) and upload the fixtures.
async fn seed_bucket(client: &aws_sdk_s3::Client) -> Result<(), String> {
    let exists = client
        .head_bucket()
        .bucket(MINIO_BUCKET)
        .send()
        .await
        .is_ok();

    if !exists {
        client
            .create_bucket()
            .bucket(MINIO_BUCKET)
            .send()
            .await
            .map_err(|e| format!("Failed to create bucket: {}", e))?;
    }

    let fixtures: [(&str, &[u8]); 2] = [
        ("2026-01-20/IMG_1234.jpg", JPEG_BYTES),
        ("manifest.json", MANIFEST_JSON.as_bytes()),
    ];

    for (key, data) in fixtures {
        client
            .put_object()
            .bucket(MINIO_BUCKET)
            .key(key)
            .body(ByteStream::from(Bytes::copy_from_slice(data)))
            .send()
            .await
            .map_err(|e| format!("Failed to upload {}: {}", key, e))?;
    }

    Ok(())
}

/// Serve the router on an ephemeral port and return its address.
async fn spawn_server(store: S3ObjectStore) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = create_router(store, RouterConfig::new().with_tracing(false));

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}

/// Helper to skip test with a message
macro_rules! skip_if {
    ($cond:expr, $msg:expr) => {
        if $cond {
            eprintln!("SKIPPED: {}", $msg);
            return;
        }
    };
}

// =============================================================================
// Store Tests
// =============================================================================

#[tokio::test]
#[ignore]
async fn test_real_store_get() {
    skip_if!(!is_minio_available().await, "MinIO is not available");

    let client = create_minio_client();
    seed_bucket(&client).await.expect("Failed to seed bucket");

    let store = S3ObjectStore::new(client, MINIO_BUCKET.to_string());
    store.check_bucket().await.expect("Bucket check failed");

    let object = store
        .get("2026-01-20/IMG_1234.jpg")
        .await
        .expect("get failed")
        .expect("object missing");
    assert_eq!(&object.body[..], JPEG_BYTES);

    let missing = store.get("2026-01-20/nope.jpg").await.expect("get failed");
    assert!(missing.is_none());
}

#[tokio::test]
#[ignore]
async fn test_real_store_missing_bucket_is_error() {
    skip_if!(!is_minio_available().await, "MinIO is not available");

    let store = S3ObjectStore::new(create_minio_client(), MISSING_BUCKET.to_string());

    assert!(store.check_bucket().await.is_err());
    assert!(store.get("manifest.json").await.is_err());
}

// =============================================================================
// End-to-end HTTP Tests
// =============================================================================

#[tokio::test]
#[ignore]
async fn test_real_http_photo_and_manifest() {
    skip_if!(!is_minio_available().await, "MinIO is not available");

    let client = create_minio_client();
    seed_bucket(&client).await.expect("Failed to seed bucket");

    let addr = spawn_server(S3ObjectStore::new(client, MINIO_BUCKET.to_string())).await;
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .expect("Failed to create HTTP client");

    let response = http_client
        .get(format!("http://{}/photo/2026-01-20/IMG_1234.jpg", addr))
        .send()
        .await
        .expect("Failed to send photo request");
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.headers()["content-type"], "image/jpeg");
    assert_eq!(
        response.headers()["cache-control"],
        "public, max-age=31536000, immutable"
    );
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    let body = response.bytes().await.expect("Failed to read body");
    assert_eq!(&body[..], JPEG_BYTES);

    let response = http_client
        .get(format!("http://{}/photo/manifest.json?t=1", addr))
        .send()
        .await
        .expect("Failed to send manifest request");
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.headers()["content-type"], "application/json");
    assert_eq!(
        response.headers()["cache-control"],
        "public, max-age=300, must-revalidate"
    );

    let response = http_client
        .get(format!("http://{}/photo/missing.png", addr))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(response.text().await.unwrap(), "Photo not found");
}

#[tokio::test]
#[ignore]
async fn test_real_http_storage_failure() {
    skip_if!(!is_minio_available().await, "MinIO is not available");

    let store = S3ObjectStore::new(create_minio_client(), MISSING_BUCKET.to_string());
    let addr = spawn_server(store).await;

    let response = reqwest::get(format!("http://{}/photo/manifest.json", addr))
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 500);
    assert_eq!(response.text().await.unwrap(), "Internal Server Error");
}
