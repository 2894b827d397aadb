//! Application state for the HTTP server.

use crate::store::ProductRepository;
use std::sync::Arc;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Catalog instance backing all product operations
    pub catalog: Arc<dyn ProductRepository>,
}

impl AppState {
    /// Create a new application state with the given catalog.
    pub fn new(catalog: Arc<dyn ProductRepository>) -> Self {
        Self { catalog }
    }
}
