//! Product storage backed by a JSON document.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::models::Product;

/// Catalog shipped with the binary, used when no path is configured.
const EMBEDDED_CATALOG: &str = include_str!("../../data/product.json");

/// Error loading the product catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error reading catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error in catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read access to products.
pub trait ProductRepository: Send + Sync {
    fn find_all(&self) -> Vec<Product>;

    fn find_by_id(&self, id: i64) -> Option<Product>;
}

/// Repository holding a catalog parsed from JSON.
#[derive(Debug, Clone)]
pub struct JsonProductRepository {
    products: Vec<Product>,
}

impl JsonProductRepository {
    /// Parse a JSON array of products.
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(content)?;
        Ok(Self { products })
    }

    /// Load the catalog from a file on disk.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        let repo = Self::from_json(&content)?;
        tracing::info!(path = %path.display(), products = repo.products.len(), "Catalog loaded");
        Ok(repo)
    }

    /// Load the catalog compiled into the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load from `path` when given, otherwise fall back to the embedded catalog.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(p) => Self::from_path(p),
            None => Self::embedded(),
        }
    }
}

impl ProductRepository for JsonProductRepository {
    fn find_all(&self) -> Vec<Product> {
        self.products.clone()
    }

    fn find_by_id(&self, id: i64) -> Option<Product> {
        self.products.iter().find(|p| p.id == id).cloned()
    }
}
