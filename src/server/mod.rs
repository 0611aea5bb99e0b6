//! HTTP server layer for the photo proxy.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         HTTP Layer                              │
//! │                  GET /photo/{*path}                             │
//! │                                                                 │
//! │  ┌─────────────────────────┐  ┌─────────────────────────────┐   │
//! │  │        handlers         │  │           routes            │   │
//! │  │ (path -> proxy::handle) │  │ (router config, tracing)    │   │
//! │  └─────────────────────────┘  └─────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    health_handler, photo_handler, photo_root_handler, preflight_handler, AppState,
    HealthResponse, PREFLIGHT_MAX_AGE,
};
pub use routes::{build_router, create_router, RouterConfig};
