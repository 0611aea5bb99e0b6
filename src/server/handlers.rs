//! HTTP request handlers for the photo proxy.
//!
//! # Endpoints
//!
//! - `GET|HEAD /photo/{*path}` - Serve a stored photo or manifest
//! - `GET|HEAD /photo`, `/photo/` - Empty key, always `404`
//! - `OPTIONS /photo/{*path}` - CORS preflight
//! - `GET /health` - Health check endpoint

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::proxy::{self, CORS_ALLOW_METHODS, CORS_ALLOW_ORIGIN};
use crate::storage::ObjectStore;

/// How long browsers may cache a preflight answer, in seconds.
pub const PREFLIGHT_MAX_AGE: u32 = 86400;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state containing the object store.
///
/// This is passed to all handlers via Axum's State extractor.
pub struct AppState<S: ObjectStore> {
    /// Backend the photos are read from
    pub store: Arc<S>,
}

impl<S: ObjectStore> AppState<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

impl<S: ObjectStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Serve the object stored under the captured path.
///
/// # Endpoint
///
/// `GET /photo/{*path}` (also answers `HEAD`, with the body dropped)
///
/// The captured path is split on `/` and handed to [`proxy::handle`], which
/// strips a leftover `photo/` prefix, fetches the object and derives the
/// response headers. The query string is ignored.
///
/// # Response
///
/// - `200 OK`: object bytes with `Content-Type`, `Cache-Control` and CORS headers
/// - `404 Not Found`: `Photo not found`
/// - `500 Internal Server Error`: `Internal Server Error`
pub async fn photo_handler<S: ObjectStore>(
    State(state): State<AppState<S>>,
    Path(path): Path<String>,
) -> Response {
    let segments: Vec<&str> = path.split('/').collect();
    proxy::handle(&segments, state.store.as_ref()).await
}

/// Serve a request for the bare mount path, which addresses the empty key.
pub async fn photo_root_handler<S: ObjectStore>(State(state): State<AppState<S>>) -> Response {
    let segments: [&str; 0] = [];
    proxy::handle(&segments, state.store.as_ref()).await
}

/// Answer CORS preflight requests for photo paths.
///
/// # Endpoint
///
/// `OPTIONS /photo/{*path}`
///
/// # Response
///
/// `204 No Content` with the same CORS headers photo responses carry.
pub async fn preflight_handler() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, CORS_ALLOW_ORIGIN.to_string()),
            (header::ACCESS_CONTROL_ALLOW_METHODS, CORS_ALLOW_METHODS.to_string()),
            (header::ACCESS_CONTROL_MAX_AGE, PREFLIGHT_MAX_AGE.to_string()),
        ],
    )
}

/// Handle health check requests.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// Tests
// =============================================================================
