//! HTTP Load Generator Library
//!
//! Issues a fixed number of GET requests against one URL with bounded
//! concurrency and summarizes the status codes that came back.

pub mod aggregation;
pub mod config;
pub mod engine;
pub mod observability;
pub mod report;

pub use aggregation::ReportData;
pub use config::{GeneratorConfig, LoadTestConfig};
pub use engine::{Dispatcher, HttpExecutor, RequestExecutor, RequestOutcome};
pub use report::{ReportSink, sink_for};
