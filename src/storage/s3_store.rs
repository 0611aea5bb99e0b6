use async_trait::async_trait;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_s3::Client;
use tracing::debug;

use super::{ObjectStore, StoredObject};
use crate::error::StorageError;

/// S3-backed implementation of `ObjectStore`.
///
/// Works against AWS S3 and S3-compatible services such as Cloudflare R2 and
/// MinIO. The storage key is used verbatim as the object key in the bucket.
///
/// # Example
///
/// ```ignore
/// use photo_proxy::storage::{create_s3_client, S3ObjectStore};
///
/// let client = create_s3_client(Some("https://<account>.r2.cloudflarestorage.com"), "auto").await;
/// let store = S3ObjectStore::new(client, "gallery".to_string());
///
/// let object = store.get("2026-01-20/IMG_1234.jpg").await?;
/// ```
#[derive(Clone)]
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
}

impl S3ObjectStore {
    /// Create a new store reading from `bucket`.
    pub fn new(client: Client, bucket: String) -> Self {
        Self { client, bucket }
    }

    /// Get the bucket name.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Check that the bucket exists and the credentials can reach it.
    pub async fn check_bucket(&self) -> Result<(), StorageError> {
        self.client
            .head_bucket()
            .bucket(&self.bucket)
            .send()
            .await
            .map_err(|e| sdk_error(&e))?;
        Ok(())
    }
}

/// `SdkError`'s own `Display` is just "service error"; the full source chain
/// carries the error code and message.
fn sdk_error<E: std::error::Error>(err: &E) -> StorageError {
    StorageError::S3(DisplayErrorContext(err).to_string())
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn get(&self, key: &str) -> Result<Option<StoredObject>, StorageError> {
        // S3 answers an empty key with a request error rather than a 404
        if key.is_empty() {
            return Ok(None);
        }

        let resp = match self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                let code = e.as_service_error().and_then(|se| se.code());
                let no_such_key = e
                    .as_service_error()
                    .map(|se| se.is_no_such_key())
                    .unwrap_or(false);

                // Some S3-compatible services omit the NoSuchKey error code.
                // A missing bucket is also a 404 but means misconfiguration.
                let status_is_404 = e
                    .raw_response()
                    .map(|r| r.status().as_u16() == 404)
                    .unwrap_or(false);

                if no_such_key || (status_is_404 && code != Some("NoSuchBucket")) {
                    debug!(bucket = %self.bucket, key, "Object not found");
                    return Ok(None);
                }

                return Err(sdk_error(&e));
            }
        };

        let body = resp
            .body
            .collect()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?
            .into_bytes();

        Ok(Some(StoredObject::new(body)))
    }
}

/// Create an S3 client with optional custom endpoint and region.
///
/// Use a custom endpoint for S3-compatible services such as R2 or MinIO:
/// ```ignore
/// let client = create_s3_client(Some("http://localhost:9000"), "us-east-1").await;
/// ```
///
/// For AWS S3, pass `None` to use the default endpoint:
/// ```ignore
/// let client = create_s3_client(None, "us-east-1").await;
/// ```
pub async fn create_s3_client(endpoint_url: Option<&str>, region: &str) -> Client {
    let region = aws_config::Region::new(region.to_string());
    let mut config_loader =
        aws_config::defaults(aws_config::BehaviorVersion::latest()).region(region);

    if let Some(endpoint) = endpoint_url {
        config_loader = config_loader.endpoint_url(endpoint);
    }

    let sdk_config = config_loader.load().await;

    // S3-compatible services generally need path-style addressing
    let s3_config = if endpoint_url.is_some() {
        aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(true)
            .build()
    } else {
        aws_sdk_s3::config::Builder::from(&sdk_config).build()
    };

    Client::from_conf(s3_config)
}
