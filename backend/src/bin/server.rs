//! Collatz HTTP Server Binary
//!
//! This is the main entry point for the Collatz REST API server.
//! It loads the configuration, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin collatz-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8000)
//! - `COLLATZ_MAX_RANGE_SPAN`: Largest range per request (default: 100000)
//! - `COLLATZ_MAX_NUMBER`: Largest accepted number (default: 2^53 - 1)
//! - `RUST_LOG`: Log filter directives, e.g. `collatz_backend=debug` (default: info)
//!
//! Values from `collatz.toml` are used when present and overridden by the
//! variables above.

use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use collatz_backend::config::ServerConfig;
use collatz_backend::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Collatz HTTP Server");

    let config = ServerConfig::load()?;
    info!(
        max_range_span = config.limits.max_range_span,
        max_number = config.limits.max_number,
        "Configuration loaded"
    );

    let addr: SocketAddr = config.bind_address().parse()?;

    // Create router with all endpoints
    let app = create_router(AppState::new(config));

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
