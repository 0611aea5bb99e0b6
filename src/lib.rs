//! # Photo Proxy
//!
//! An HTTP proxy that serves gallery photos and manifests from an
//! S3-compatible bucket (Cloudflare R2, MinIO, AWS S3).
//!
//! A request for `/photo/2026-01-20/IMG_1234.jpg` is turned into the storage
//! key `2026-01-20/IMG_1234.jpg`, fetched from the bucket and returned with a
//! `Content-Type` and `Cache-Control` derived from the key's extension.
//!
//! ## Architecture
//!
//! - [`proxy`] - Key normalization, header derivation and the request handler
//! - [`storage`] - `ObjectStore` trait with S3 and in-memory backends
//! - [`server`] - Axum routes and handlers
//! - [`config`] - CLI and environment configuration
//!
//! ## Example
//!
//! ```rust,no_run
//! use photo_proxy::{create_router, MemoryObjectStore, RouterConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = MemoryObjectStore::new().with_object("manifest.json", &b"[]"[..]);
//!     let router = create_router(store, RouterConfig::new());
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8788").await.unwrap();
//!     axum::serve(listener, router).await.unwrap();
//! }
//! ```

pub mod config;
pub mod error;
pub mod proxy;
pub mod server;
pub mod storage;

// Re-export commonly used types
pub use config::Config;
pub use error::StorageError;
pub use proxy::{cache_control_for, content_type_for, handle, storage_key};
pub use server::{build_router, create_router, AppState, HealthResponse, RouterConfig};
pub use storage::{create_s3_client, MemoryObjectStore, ObjectStore, S3ObjectStore, StoredObject};
