//! Error types for catalog storage operations.

use crate::api::ProductId;

/// Result type for catalog storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for catalog storage operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No product with the requested id exists.
    #[error("Product {0} not found")]
    NotFound(ProductId),

    /// Statistics were requested over an empty catalog.
    #[error("No products available to calculate statistics")]
    EmptyCatalog,
}
