//! Public API surface for the product catalog.
//!
//! This file consolidates the catalog record and aggregate types shared by
//! the storage layer and the HTTP API. All types derive
//! Serialize/Deserialize for JSON serialization.

use serde::{Deserialize, Serialize};

/// Product identifier (client-assigned).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(value: i64) -> Self {
        ProductId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ProductId> for i64 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        ProductId(value)
    }
}

/// A single catalog entry.
///
/// The id is supplied by the client and is not required to be unique; the
/// catalog stores whatever it is given, in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Client-assigned identifier
    pub id: ProductId,
    /// Display name
    pub name: String,
    /// Free-form category label
    pub category: String,
    /// Unit price
    pub price: f64,
    /// Units in stock
    pub quantity: i64,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            price,
            quantity,
        }
    }
}

/// Partial update for an existing product.
///
/// Each field is applied only when present; `None` leaves the stored value
/// untouched. The id itself is never updatable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

/// Aggregates for one numeric field across the whole catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldStats {
    /// Arithmetic mean
    pub average: f64,
    /// Largest value
    pub max: f64,
    /// Smallest value
    pub min: f64,
}

/// Catalog-wide statistics over price and quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub price: FieldStats,
    pub quantity: FieldStats,
}
