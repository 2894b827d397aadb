//! Data Transfer Objects for the HTTP API.
//!
//! Catalog records and aggregates are re-exported from the api module since
//! they already derive Serialize/Deserialize. What lives here is the strict
//! request validation: bodies are parsed as raw JSON and checked field by
//! field so the response can name the first offending field.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// Re-export existing DTOs that are already serializable
pub use crate::api::{CatalogStats, FieldStats, Product, ProductId, ProductUpdate};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,
    /// Crate version
    pub version: String,
    /// Number of products currently stored
    pub products: usize,
}

/// Message used both for absent fields and for present fields of the wrong
/// JSON type.
fn blank(label: &str) -> String {
    format!("{} cannot be blank", label)
}

fn as_object(value: &Value) -> Result<&Map<String, Value>, String> {
    value
        .as_object()
        .ok_or_else(|| "Request body must be a JSON object".to_string())
}

/// A `null` field counts as blank, same as a missing or mistyped one.
fn string_field(body: &Map<String, Value>, key: &str, label: &str) -> Result<String, String> {
    body.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| blank(label))
}

fn integer_field(body: &Map<String, Value>, key: &str, label: &str) -> Result<i64, String> {
    body.get(key).and_then(Value::as_i64).ok_or_else(|| blank(label))
}

/// Accepts both integral and fractional JSON numbers.
fn number_field(body: &Map<String, Value>, key: &str, label: &str) -> Result<f64, String> {
    body.get(key).and_then(Value::as_f64).ok_or_else(|| blank(label))
}

/// Parse and validate a creation request body.
///
/// All five fields are required. Fields are checked in declaration order and
/// the first missing or mistyped one is reported. Extra fields are ignored.
pub fn product_from_json(value: &Value) -> Result<Product, String> {
    let body = as_object(value)?;

    let id = integer_field(body, "id", "ID")?;
    let name = string_field(body, "name", "Name")?;
    let category = string_field(body, "category", "Category")?;
    let price = number_field(body, "price", "Price")?;
    let quantity = integer_field(body, "quantity", "Quantity")?;

    Ok(Product {
        id: ProductId::new(id),
        name,
        category,
        price,
        quantity,
    })
}

/// Parse and validate a partial update body.
///
/// Only fields present in the body are validated and applied, so explicit
/// zeroes and empty strings go through. The id and any unknown fields are
/// ignored.
pub fn update_from_json(value: &Value) -> Result<ProductUpdate, String> {
    let body = as_object(value)?;

    let mut update = ProductUpdate::default();
    if body.contains_key("name") {
        update.name = Some(string_field(body, "name", "Name")?);
    }
    if body.contains_key("category") {
        update.category = Some(string_field(body, "category", "Category")?);
    }
    if body.contains_key("price") {
        update.price = Some(number_field(body, "price", "Price")?);
    }
    if body.contains_key("quantity") {
        update.quantity = Some(integer_field(body, "quantity", "Quantity")?);
    }

    Ok(update)
}
