//! Configuration management for the photo proxy.
//!
//! Settings come from command-line arguments via clap, falling back to
//! environment variables with the `PHOTO_PROXY_` prefix, then to defaults.
//!
//! # Example
//!
//! ```ignore
//! use photo_proxy::config::Config;
//!
//! let config = Config::parse();
//! println!("Listening on {}", config.bind_address());
//! println!("Bucket: {}", config.bucket);
//! ```
//!
//! # Environment Variables
//!
//! - `PHOTO_PROXY_HOST` - Server bind address (default: 0.0.0.0)
//! - `PHOTO_PROXY_PORT` - Server port (default: 8788)
//! - `PHOTO_PROXY_BUCKET` - Bucket holding the photos (required)
//! - `PHOTO_PROXY_S3_ENDPOINT` - Custom endpoint for R2, MinIO and other S3-compatible services
//! - `PHOTO_PROXY_S3_REGION` - Region (default: auto)
//!
//! Credentials are read by the AWS SDK from its usual sources
//! (`AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`, profiles).

use clap::Parser;

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_PORT: u16 = 8788;

/// Default region. R2 expects `auto`; AWS S3 needs a real region.
pub const DEFAULT_REGION: &str = "auto";

// =============================================================================
// CLI Arguments
// =============================================================================

/// Photo Proxy - serves gallery photos and manifests from object storage.
#[derive(Parser, Debug, Clone)]
#[command(name = "photo-proxy")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    // =========================================================================
    // Server Configuration
    // =========================================================================
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "PHOTO_PROXY_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "PHOTO_PROXY_PORT")]
    pub port: u16,

    // =========================================================================
    // Storage Configuration
    // =========================================================================
    /// Bucket containing the photos and manifest.
    #[arg(long, env = "PHOTO_PROXY_BUCKET")]
    pub bucket: String,

    /// Custom S3 endpoint URL (Cloudflare R2, MinIO, etc.).
    ///
    /// If not specified, uses the default AWS S3 endpoint.
    #[arg(long, env = "PHOTO_PROXY_S3_ENDPOINT")]
    pub s3_endpoint: Option<String>,

    /// Region passed to the S3 client.
    #[arg(long, default_value = DEFAULT_REGION, env = "PHOTO_PROXY_S3_REGION")]
    pub s3_region: String,

    /// Skip the bucket reachability check at startup.
    #[arg(long, default_value_t = false)]
    pub skip_bucket_check: bool,

    // =========================================================================
    // Logging Configuration
    // =========================================================================
    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.bucket.trim().is_empty() {
            return Err("Bucket name is required. Set --bucket or PHOTO_PROXY_BUCKET".to_string());
        }

        if self.port == 0 {
            return Err("port must be greater than 0".to_string());
        }

        if let Some(ref endpoint) = self.s3_endpoint {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(format!(
                    "s3_endpoint must be an http:// or https:// URL, got '{}'",
                    endpoint
                ));
            }
        }

        if self.s3_region.is_empty() {
            return Err("s3_region must not be empty".to_string());
        }

        Ok(())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// Tests
// =============================================================================
