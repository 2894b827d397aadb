//! Catalog repository trait for product CRUD and statistics.
//!
//! This trait defines the storage operations the HTTP layer is written
//! against. The in-memory implementation lives in [`super::memory`]; swapping
//! in a persistent backend only requires another implementation of this
//! trait.

use async_trait::async_trait;

use super::error::StoreResult;
use crate::api::{CatalogStats, Product, ProductId, ProductUpdate};

/// Repository trait for catalog storage operations.
///
/// Lookups resolve by linear scan in insertion order: `get_product` and
/// `update_product` act on the first matching record, `delete_product`
/// removes every match. Duplicate ids are accepted and preserved.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    // ==================== Health ====================

    /// Check if the underlying store is reachable.
    ///
    /// # Returns
    /// - `Ok(true)` if the store is healthy
    /// - `Ok(false)` if the store is unhealthy but no error occurred
    /// - `Err(StoreError)` if an error occurred during the check
    async fn health_check(&self) -> StoreResult<bool>;

    // ==================== Product Operations ====================

    /// List every product in insertion order.
    async fn list_products(&self) -> StoreResult<Vec<Product>>;

    /// Append a product to the catalog.
    ///
    /// No uniqueness check is performed on the id; callers that care about
    /// duplicates must enforce that themselves.
    ///
    /// # Returns
    /// * `Ok(Product)` - The stored record, echoed back
    async fn create_product(&self, product: Product) -> StoreResult<Product>;

    /// Fetch the first product with the given id.
    ///
    /// # Returns
    /// * `Ok(Product)` - The first matching record
    /// * `Err(StoreError::NotFound)` - If no product has this id
    async fn get_product(&self, id: ProductId) -> StoreResult<Product>;

    /// Apply a partial update to the first product with the given id.
    ///
    /// Only fields present in `update` are written; absent fields keep their
    /// stored values. The id itself is never changed.
    ///
    /// # Returns
    /// * `Ok(Product)` - The record after the update
    /// * `Err(StoreError::NotFound)` - If no product has this id
    async fn update_product(&self, id: ProductId, update: ProductUpdate) -> StoreResult<Product>;

    /// Remove every product with the given id.
    ///
    /// Deleting an id with no matches is not an error; the operation is
    /// idempotent.
    async fn delete_product(&self, id: ProductId) -> StoreResult<()>;

    // ==================== Statistics ====================

    /// Compute average, max and min over price and quantity.
    ///
    /// # Returns
    /// * `Ok(CatalogStats)` - Aggregates over the current catalog contents
    /// * `Err(StoreError::EmptyCatalog)` - If the catalog holds no products
    async fn catalog_stats(&self) -> StoreResult<CatalogStats>;
}
