//! Startup orchestration.
//!
//! Builds everything the router needs from a validated config. Subsystems
//! initialize in order; the listener is bound by the caller afterwards.

use std::sync::Arc;
use thiserror::Error;

use crate::catalog::{CatalogError, CatalogService, JsonProductRepository};
use crate::config::AppConfig;
use crate::http::server::AppState;
use crate::shaper::views::{RenderError, TemplateViews};

/// Fatal error while preparing the service.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("views: {0}")]
    Views(#[from] RenderError),
}

/// Load the catalog and compile the views for `config`.
pub fn build_state(config: AppConfig) -> Result<AppState, StartupError> {
    let repository = JsonProductRepository::load(config.catalog.products_path.as_deref())?;
    let views = TemplateViews::embedded()?;

    Ok(AppState {
        config: Arc::new(config),
        views: Arc::new(views),
        products: Arc::new(CatalogService::new(Arc::new(repository))),
    })
}
