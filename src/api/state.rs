//! API server state

use std::sync::Arc;

use crate::catalog::PropertyCatalog;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Loader for the properties document
    pub catalog: Arc<PropertyCatalog>,
}

impl AppState {
    pub fn new(catalog: Arc<PropertyCatalog>) -> Self {
        Self { catalog }
    }
}
