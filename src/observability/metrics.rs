//! Metrics collection and exposition.
//!
//! # Metrics
//! - `loadgen_requests_total` (counter): completed requests by outcome
//! - `loadgen_request_duration_seconds` (histogram): per-request latency
//! - `loadgen_in_flight_requests` (gauge): requests currently executing
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; a no-op unless an exporter is installed
//! - Prometheus exporter is opt-in so short runs need no listener
//! - Outcome label is the status code or `transport_failure`

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::engine::outcome::RequestOutcome;

/// Install the Prometheus exporter listening on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Prometheus metrics exporter listening");
    Ok(())
}

/// Record a completed request.
pub fn record_outcome(outcome: &RequestOutcome, started: Instant) {
    metrics::counter!("loadgen_requests_total", "outcome" => outcome.label()).increment(1);
    metrics::histogram!("loadgen_request_duration_seconds").record(started.elapsed().as_secs_f64());
}

/// Publish the number of requests currently executing.
pub fn record_in_flight(in_flight: usize) {
    metrics::gauge!("loadgen_in_flight_requests").set(in_flight as f64);
}
