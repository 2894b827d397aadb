//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the catalog
//! repository for storage. Request bodies arrive as raw JSON and go through
//! the strict validation in the dto module, so malformed input is rejected
//! before any lookup happens.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use super::dto::{self, CatalogStats, HealthResponse, Product, ProductId};
use super::error::AppError;
use super::state::AppState;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Map a rejected JSON body extraction to a 400 with a message body.
fn reject_body(rejection: JsonRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}

/// Map a rejected path capture (non-integer id) to a 400 with a message body.
fn reject_path(rejection: PathRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the catalog is
/// reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let status = match state.catalog.health_check().await {
        Ok(true) => "ok".to_string(),
        Ok(false) => "degraded".to_string(),
        Err(e) => format!("error: {}", e),
    };
    let products = state.catalog.list_products().await?.len();

    Ok(Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        products,
    }))
}

// =============================================================================
// Product CRUD
// =============================================================================

/// GET /products
///
/// List every product in insertion order.
pub async fn list_products(State(state): State<AppState>) -> HandlerResult<Vec<Product>> {
    let products = state.catalog.list_products().await?;
    Ok(Json(products))
}

/// POST /products
///
/// Create a product from a complete JSON body. Duplicate ids are accepted.
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let Json(body) = payload.map_err(reject_body)?;
    let product = dto::product_from_json(&body).map_err(AppError::BadRequest)?;

    let created = state.catalog.create_product(product).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /products/{id}
///
/// Fetch the first product with the given id.
pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> HandlerResult<Product> {
    let Path(id) = id.map_err(reject_path)?;

    let product = state.catalog.get_product(ProductId::new(id)).await?;
    Ok(Json(product))
}

/// PUT /products/{id}
///
/// Apply a partial update to the first product with the given id. The body
/// is validated before the catalog is consulted, so a bad field on a missing
/// id still reports 400.
pub async fn update_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> HandlerResult<Product> {
    let Path(id) = id.map_err(reject_path)?;
    let Json(body) = payload.map_err(reject_body)?;
    let update = dto::update_from_json(&body).map_err(AppError::BadRequest)?;

    let updated = state.catalog.update_product(ProductId::new(id), update).await?;
    Ok(Json(updated))
}

/// DELETE /products/{id}
///
/// Remove every product with the given id. Responds 204 whether or not
/// anything matched.
pub async fn delete_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id.map_err(reject_path)?;

    state.catalog.delete_product(ProductId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Statistics
// =============================================================================

/// GET /products/stats
///
/// Aggregate price and quantity over the whole catalog.
pub async fn product_stats(State(state): State<AppState>) -> HandlerResult<CatalogStats> {
    let stats = state.catalog.catalog_stats().await?;
    Ok(Json(stats))
}
