//! Catalog storage module.
//!
//! This module provides the storage abstraction for the product catalog via
//! the Repository pattern, so a persistent backend can be swapped in without
//! touching the HTTP layer.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                 │
//! └───────────────────┬─────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────┐
//! │  Repository Trait (repository.rs)           │
//! └───────────────────┬─────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────┐
//! │  MemoryCatalog (memory.rs)                  │
//! │  Vec<Product> behind one RwLock             │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The module includes:
//! - `repository`: Trait definition for catalog operations
//! - `memory`: In-memory implementation backing the server and the tests
//! - `error`: Storage error types

pub mod error;
pub mod memory;
pub mod repository;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryCatalog;
pub use repository::ProductRepository;
