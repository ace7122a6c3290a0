//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and the params layer produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every log line via the trace span
//! - Metric calls are no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
