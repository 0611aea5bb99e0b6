//! The photo proxy handler.
//!
//! Turns a request path into a storage key, fetches the object and answers
//! with headers derived purely from the key:
//!
//! | Key suffix          | Content-Type               | Cache-Control                          |
//! |---------------------|----------------------------|----------------------------------------|
//! | `.jpg`, `.jpeg`     | `image/jpeg`               | `public, max-age=31536000, immutable`  |
//! | `.png`              | `image/png`                | `public, max-age=31536000, immutable`  |
//! | `.webp`             | `image/webp`               | `public, max-age=31536000, immutable`  |
//! | `.json`             | `application/json`         | `public, max-age=300, must-revalidate` |
//! | anything else       | `application/octet-stream` | `public, max-age=31536000, immutable`  |
//!
//! Every successful response also carries `Access-Control-Allow-Origin: *` and
//! `Access-Control-Allow-Methods: GET, HEAD, OPTIONS`.

use axum::{
    body::Body,
    response::{IntoResponse, Response},
};
use http::{header, StatusCode};
use tracing::{debug, error};

use crate::storage::ObjectStore;

/// Prefix the routing layer sometimes leaves on the captured path.
pub const ROUTE_PREFIX: &str = "photo/";

/// Cache policy for manifests, which change as photos are published.
pub const MANIFEST_CACHE_CONTROL: &str = "public, max-age=300, must-revalidate";

/// Cache policy for everything else. Assumes keys are never overwritten.
pub const ASSET_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_METHODS: &str = "GET, HEAD, OPTIONS";

pub const NOT_FOUND_BODY: &str = "Photo not found";
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

/// Join path segments into a storage key, dropping one leading `photo/`.
pub fn storage_key<S: AsRef<str>>(segments: &[S]) -> String {
    let joined = segments
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join("/");

    match joined.strip_prefix(ROUTE_PREFIX) {
        Some(rest) => rest.to_string(),
        None => joined,
    }
}

/// Content type inferred from the key's extension (case-sensitive).
pub fn content_type_for(key: &str) -> &'static str {
    if key.ends_with(".jpg") || key.ends_with(".jpeg") {
        "image/jpeg"
    } else if key.ends_with(".png") {
        "image/png"
    } else if key.ends_with(".webp") {
        "image/webp"
    } else if key.ends_with(".json") {
        "application/json"
    } else {
        "application/octet-stream"
    }
}

/// Cache policy for the key: short-lived for JSON, a year otherwise.
pub fn cache_control_for(key: &str) -> &'static str {
    if key.ends_with(".json") {
        MANIFEST_CACHE_CONTROL
    } else {
        ASSET_CACHE_CONTROL
    }
}

/// Serve the object addressed by `segments` from `store`.
///
/// - `200 OK` with the object bytes and derived headers
/// - `404 Not Found` with body `Photo not found` when the key has no object
/// - `500 Internal Server Error` with body `Internal Server Error` when the
///   store fails; the failure is logged and not retried
pub async fn handle<S, St>(segments: &[S], store: &St) -> Response
where
    S: AsRef<str>,
    St: ObjectStore + ?Sized,
{
    let key = storage_key(segments);

    let object = match store.get(&key).await {
        Ok(Some(object)) => object,
        Ok(None) => {
            debug!(key = %key, "Photo not found");
            return (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response();
        }
        Err(err) => {
            error!(key = %key, error = %err, "Storage error while fetching photo");
            return (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response();
        }
    };

    debug!(key = %key, bytes = object.len(), "Serving photo");

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type_for(&key)),
            (header::CACHE_CONTROL, cache_control_for(&key)),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, CORS_ALLOW_ORIGIN),
            (header::ACCESS_CONTROL_ALLOW_METHODS, CORS_ALLOW_METHODS),
        ],
        Body::from(object.body),
    )
        .into_response()
}
