//! Object storage abstraction.
//!
//! The proxy only ever needs one operation from its backend: fetch the bytes
//! stored under an exact key, or learn that nothing is stored there.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              proxy::handle              │
//! └────────────────────┬────────────────────┘
//!                      │ get(key)
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │           ObjectStore Trait             │
//! └────────────────────┬────────────────────┘
//!                      │
//!          ┌───────────┴───────────┐
//!          ▼                       ▼
//! ┌─────────────────┐    ┌─────────────────────┐
//! │  S3ObjectStore  │    │ MemoryObjectStore   │
//! │ (R2, MinIO, S3) │    │ (tests, local dev)  │
//! └─────────────────┘    └─────────────────────┘
//! ```

mod memory_store;
mod s3_store;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::StorageError;

pub use memory_store::MemoryObjectStore;
pub use s3_store::{create_s3_client, S3ObjectStore};

/// An object fetched from storage.
///
/// Carries no metadata: the proxy derives every response header from the key.
#[derive(Debug, Clone)]
pub struct StoredObject {
    /// Raw object bytes
    pub body: Bytes,
}

impl StoredObject {
    pub fn new(body: impl Into<Bytes>) -> Self {
        Self { body: body.into() }
    }

    /// Size of the object in bytes.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Key-addressed read access to a bucket.
///
/// Implementations must be thread-safe; a single store is shared by every
/// in-flight request.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch the object stored under `key`.
    ///
    /// Returns `Ok(None)` when no object exists for the key, and an error only
    /// when the backend itself failed.
    async fn get(&self, key: &str) -> Result<Option<StoredObject>, StorageError>;
}
