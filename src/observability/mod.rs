//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Dispatcher and request tasks produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → stderr log output
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Structured logging with a per-run ID on every event
//! - Metrics are cheap (atomic increments) and off unless exported

pub mod logging;
pub mod metrics;
