//! In-memory catalog implementation.
//!
//! Products live in a single `Vec` behind one `RwLock`, so insertion order
//! is preserved and every operation sees a consistent snapshot. Lookups are
//! linear scans, which is the right trade for the small catalogs this
//! service holds.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

use super::error::{StoreError, StoreResult};
use super::repository::ProductRepository;
use crate::api::{CatalogStats, FieldStats, Product, ProductId, ProductUpdate};

/// In-memory product catalog.
///
/// Cloning is cheap and every clone shares the same underlying storage.
///
/// # Example
/// ```
/// use product_catalog::store::MemoryCatalog;
///
/// let catalog = MemoryCatalog::new();
/// assert!(catalog.is_empty());
/// ```
#[derive(Clone)]
pub struct MemoryCatalog {
    products: Arc<RwLock<Vec<Product>>>,
}

impl MemoryCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Number of products currently stored, counting duplicates.
    pub fn len(&self) -> usize {
        self.products.read().len()
    }

    /// Whether the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.read().is_empty()
    }

    /// Remove every product.
    pub fn clear(&self) {
        self.products.write().clear();
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregates over a non-empty list of values.
fn field_stats(values: &[f64]) -> FieldStats {
    let sum: f64 = values.iter().sum();
    let average = sum / values.len() as f64;
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);

    FieldStats { average, max, min }
}

#[async_trait]
impl ProductRepository for MemoryCatalog {
    async fn health_check(&self) -> StoreResult<bool> {
        Ok(true)
    }

    async fn list_products(&self) -> StoreResult<Vec<Product>> {
        Ok(self.products.read().clone())
    }

    async fn create_product(&self, product: Product) -> StoreResult<Product> {
        self.products.write().push(product.clone());
        Ok(product)
    }

    async fn get_product(&self, id: ProductId) -> StoreResult<Product> {
        self.products
            .read()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn update_product(&self, id: ProductId, update: ProductUpdate) -> StoreResult<Product> {
        let mut products = self.products.write();
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound(id))?;

        if let Some(name) = update.name {
            product.name = name;
        }
        if let Some(category) = update.category {
            product.category = category;
        }
        if let Some(price) = update.price {
            product.price = price;
        }
        if let Some(quantity) = update.quantity {
            product.quantity = quantity;
        }

        Ok(product.clone())
    }

    async fn delete_product(&self, id: ProductId) -> StoreResult<()> {
        self.products.write().retain(|p| p.id != id);
        Ok(())
    }

    async fn catalog_stats(&self) -> StoreResult<CatalogStats> {
        let products = self.products.read();
        if products.is_empty() {
            return Err(StoreError::EmptyCatalog);
        }

        let prices: Vec<f64> = products.iter().map(|p| p.price).collect();
        let quantities: Vec<f64> = products.iter().map(|p| p.quantity as f64).collect();

        Ok(CatalogStats {
            price: field_stats(&prices),
            quantity: field_stats(&quantities),
        })
    }
}
