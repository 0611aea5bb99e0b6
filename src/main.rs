//! Photo Proxy - serves gallery photos from S3-compatible object storage.
//!
//! This binary parses configuration, connects to the bucket and starts the
//! HTTP server.

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use photo_proxy::{
    config::Config,
    create_s3_client,
    server::{create_router, RouterConfig},
    storage::S3ObjectStore,
};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Photo Proxy v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration:");
    info!("  Bucket: {}", config.bucket);
    if let Some(ref endpoint) = config.s3_endpoint {
        info!("  S3 endpoint: {}", endpoint);
    }
    info!("  S3 region: {}", config.s3_region);

    let s3_client = create_s3_client(config.s3_endpoint.as_deref(), &config.s3_region).await;
    let store = S3ObjectStore::new(s3_client, config.bucket.clone());

    if config.skip_bucket_check {
        warn!("Skipping bucket check; storage errors will surface as 500s");
    } else {
        info!("Connecting to bucket...");
        if let Err(e) = store.check_bucket().await {
            error!("Failed to reach bucket '{}': {}", config.bucket, e);
            error!("Please check:");
            error!("  - Your credentials are configured correctly");
            error!("  - The bucket '{}' exists and is accessible", config.bucket);
            error!("  - The S3 endpoint is correct (if using R2/MinIO)");
            return ExitCode::FAILURE;
        }
        info!("  Connected successfully");
    }

    let router_config = RouterConfig::new().with_tracing(!config.no_tracing);
    let router = create_router(store, router_config);

    let addr = config.bind_address();

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    info!("Server listening on: http://{}", addr);
    info!("  curl http://{}/health", addr);
    info!("  curl -I http://{}/photo/manifest.json", addr);

    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "photo_proxy=debug,tower_http=debug"
    } else {
        "photo_proxy=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
