//! Product Catalog HTTP Server Binary
//!
//! This is the main entry point for the catalog REST API server. It builds
//! the in-memory catalog, sets up the HTTP router, and starts serving
//! requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin catalog-server
//!
//! # Custom bind address
//! HOST=127.0.0.1 PORT=3000 cargo run --bin catalog-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0, overrides catalog.toml)
//! - `PORT`: Server port (default: 8080, overrides catalog.toml)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use product_catalog::config::CatalogConfig;
use product_catalog::http::{create_router, AppState};
use product_catalog::store::{MemoryCatalog, ProductRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting product catalog server");

    // Resolve configuration: catalog.toml if present, then HOST/PORT overrides
    let config = CatalogConfig::load()?;

    // The catalog starts empty on every boot; contents live only in memory
    let catalog = Arc::new(MemoryCatalog::new()) as Arc<dyn ProductRepository>;
    info!("Catalog store initialized");

    // Create application state
    let state = AppState::new(catalog);

    // Create router with all endpoints
    let app = create_router(state);

    let addr: SocketAddr = config.server.bind_addr().parse()?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
