//! Product catalog.
//!
//! # Data Flow
//! ```text
//! product.json (configured path or embedded copy)
//!     → repository.rs (parse once at startup)
//!     → service.rs (lookup facade used by handlers)
//! ```
//!
//! # Design Decisions
//! - The catalog is read-only after startup; no locking needed
//! - A catalog that fails to load is a startup error, never an empty list

pub mod repository;
pub mod service;

pub use repository::{CatalogError, JsonProductRepository, ProductRepository};
pub use service::{CatalogService, ProductService};
