//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → shared via Arc with every handler
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; title strings are process-wide read-only state
//! - All fields have defaults so the service starts without a file
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    AppConfig, CatalogConfig, ListenerConfig, LogFormat, ObservabilityConfig, TimeoutConfig,
    TitleConfig,
};
pub use validation::{validate_config, ValidationError};
