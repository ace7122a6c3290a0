//! Product lookups for handlers.

use std::sync::Arc;

use crate::catalog::ProductRepository;
use crate::models::Product;

/// Product operations exposed to the HTTP layer.
pub trait ProductService: Send + Sync {
    fn find_all(&self) -> Vec<Product>;

    fn find_by_id(&self, id: i64) -> Option<Product>;
}

/// Service delegating to a repository.
#[derive(Clone)]
pub struct CatalogService {
    repository: Arc<dyn ProductRepository>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }
}

impl ProductService for CatalogService {
    fn find_all(&self) -> Vec<Product> {
        self.repository.find_all()
    }

    fn find_by_id(&self, id: i64) -> Option<Product> {
        let product = self.repository.find_by_id(id);
        if product.is_none() {
            tracing::debug!(id, "Product not found");
        }
        product
    }
}
