//! Result aggregation subsystem.
//!
//! # Data Flow
//! ```text
//! request task completes
//!     → SharedAggregator::record (one locked increment)
//!     → aggregator.rs (per-outcome counters, 200 count)
//!
//! all tasks joined
//!     → Aggregator::finish
//!     → report.rs (ReportData, immutable)
//!     → report sink
//! ```

pub mod aggregator;
pub mod report;

pub use aggregator::{aggregate, Aggregator, SharedAggregator};
pub use report::ReportData;
