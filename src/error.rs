use thiserror::Error;

/// Errors that can occur when reading from object storage.
///
/// A missing object is not an error: stores report it as `Ok(None)`.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// Error from S3 or S3-compatible storage
    #[error("S3 error: {0}")]
    S3(String),

    /// Network or connection error (including body streaming failures)
    #[error("Connection error: {0}")]
    Connection(String),
}
