//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        // Product CRUD
        .route("/products", get(handlers::list_products))
        .route("/products", post(handlers::create_product))
        // Static segment, registered alongside the {id} capture below
        .route("/products/stats", get(handlers::product_stats))
        .route("/products/{id}", get(handlers::get_product))
        .route("/products/{id}", put(handlers::update_product))
        .route("/products/{id}", delete(handlers::delete_product))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryCatalog, ProductRepository};
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let catalog = Arc::new(MemoryCatalog::new()) as Arc<dyn ProductRepository>;
        let state = AppState::new(catalog);
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
