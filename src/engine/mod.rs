//! Request dispatch engine.
//!
//! # Data Flow
//! ```text
//! LoadTestConfig
//!     → dispatcher.rs (spawn one task per request)
//!     → gate.rs (wait for one of `concurrency_limit` slots)
//!     → executor.rs (HTTP GET → outcome.rs classification)
//!     → release slot, deliver outcome to the aggregator
//!     → join all tasks → ReportData
//! ```
//!
//! # Design Decisions
//! - Parallel tasks on the multi-threaded runtime, bounded by a semaphore
//! - The executor is a trait so the dispatcher can be driven without a network
//! - Outcomes may complete in any order; only counts are reported

pub mod dispatcher;
pub mod executor;
pub mod gate;
pub mod outcome;

pub use dispatcher::Dispatcher;
pub use executor::{HttpExecutor, RequestExecutor};
pub use gate::{AdmissionGate, AdmissionPermit};
pub use outcome::RequestOutcome;
