//! Demo web service: request parameter resolution and response shaping.

pub mod catalog;
pub mod config;
pub mod controllers;
pub mod http;
pub mod lifecycle;
pub mod models;
pub mod observability;
pub mod params;
pub mod shaper;

pub use config::AppConfig;
pub use http::{AppState, HttpServer};
pub use lifecycle::Shutdown;
