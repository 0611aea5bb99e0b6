//! Router configuration for the photo proxy.
//!
//! # Route Structure
//!
//! ```text
//! /health              - Health check
//! /photo/{*path}       - Photo proxy (GET, HEAD, OPTIONS)
//! /photo, /photo/      - Empty key, always 404 (GET, HEAD, OPTIONS)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use photo_proxy::server::routes::{create_router, RouterConfig};
//! use photo_proxy::storage::{create_s3_client, S3ObjectStore};
//!
//! let client = create_s3_client(Some("https://<account>.r2.cloudflarestorage.com"), "auto").await;
//! let store = S3ObjectStore::new(client, "gallery".to_string());
//!
//! let router = create_router(store, RouterConfig::new());
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8788").await?;
//! axum::serve(listener, router).await?;
//! ```

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{health_handler, photo_handler, photo_root_handler, preflight_handler, AppState};
use crate::storage::ObjectStore;

// =============================================================================
// Router Configuration
// =============================================================================

/// Configuration for the HTTP router.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Whether to enable request tracing
    pub enable_tracing: bool,
}

impl RouterConfig {
    /// Create a router configuration with tracing enabled.
    pub fn new() -> Self {
        Self {
            enable_tracing: true,
        }
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Router Builder
// =============================================================================

/// Create the main application router.
///
/// `GET` routes answer `HEAD` as well; axum strips the body.
pub fn create_router<S>(store: S, config: RouterConfig) -> Router
where
    S: ObjectStore + 'static,
{
    build_router(AppState::new(store), config)
}

/// Build the router from existing application state.
pub fn build_router<S>(app_state: AppState<S>, config: RouterConfig) -> Router
where
    S: ObjectStore + 'static,
{
    // Wildcards never match an empty remainder, so the bare mount paths
    // need their own routes
    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/photo", get(photo_root_handler::<S>).options(preflight_handler))
        .route("/photo/", get(photo_root_handler::<S>).options(preflight_handler))
        .route("/photo/{*path}", get(photo_handler::<S>).options(preflight_handler))
        .with_state(app_state);

    if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

// =============================================================================
// Tests
// =============================================================================
