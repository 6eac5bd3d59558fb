//! Bounded-concurrency request dispatch.
//!
//! # Responsibilities
//! - Spawn one task per request
//! - Admit at most `concurrency_limit` tasks into execution at once
//! - Deliver every outcome to the aggregator exactly once
//! - Wait for all tasks before building the report
//!
//! # Design Decisions
//! - A slot is acquired before the task is spawned, so at most
//!   `concurrency_limit` tasks exist at any time (backpressure)
//! - The slot is held by the task and released when it finishes or unwinds
//! - A task that dies without delivering is counted as a transport failure,
//!   keeping the one-outcome-per-request guarantee
//! - No retries and no cancellation: the run ends when every request has ended

use std::sync::Arc;
use std::time::Instant;

use tokio::task::JoinSet;
use tracing::Instrument;

use crate::aggregation::{ReportData, SharedAggregator};
use crate::config::LoadTestConfig;
use crate::engine::executor::RequestExecutor;
use crate::engine::gate::AdmissionGate;
use crate::engine::outcome::RequestOutcome;
use crate::observability::metrics;

/// Drives a full run against a single target.
#[derive(Debug)]
pub struct Dispatcher<E> {
    executor: Arc<E>,
}

impl<E: RequestExecutor> Dispatcher<E> {
    pub fn new(executor: E) -> Self {
        Self {
            executor: Arc::new(executor),
        }
    }

    /// Share an executor the caller keeps a handle to.
    #[cfg(test)]
    pub(crate) fn from_shared(executor: Arc<E>) -> Self {
        Self { executor }
    }

    /// Execute every request in `config` and return the aggregated report.
    ///
    /// Returns only once each request has produced exactly one outcome.
    pub async fn run(&self, config: &LoadTestConfig) -> ReportData {
        let total = config.request_count();
        let gate = AdmissionGate::new(config.concurrency_limit());
        let aggregator = SharedAggregator::new();
        let target: Arc<str> = Arc::from(config.target_url());

        tracing::info!(
            url = %target,
            requests = total,
            concurrency = gate.limit(),
            "Dispatch starting"
        );

        let started = Instant::now();
        let mut tasks = JoinSet::new();

        for index in 0..total {
            let permit = gate.admit().await;
            metrics::record_in_flight(gate.in_flight());

            let executor = Arc::clone(&self.executor);
            let target = Arc::clone(&target);
            let task_gate = gate.clone();
            let task_aggregator = aggregator.clone();

            tasks.spawn(
                async move {
                    let request_start = Instant::now();
                    let outcome = executor.execute(&target).await;
                    drop(permit);
                    metrics::record_in_flight(task_gate.in_flight());

                    metrics::record_outcome(&outcome, request_start);
                    tracing::trace!(request = index, outcome = %outcome, "Request completed");
                    task_aggregator.record(outcome);
                }
                .in_current_span(),
            );

            // Reap finished tasks as we go so the set stays bounded.
            while let Some(joined) = tasks.try_join_next() {
                Self::reap(joined, &aggregator);
            }
        }

        while let Some(joined) = tasks.join_next().await {
            Self::reap(joined, &aggregator);
        }
        metrics::record_in_flight(0);

        let elapsed = started.elapsed();
        let report = aggregator.into_report(elapsed, total);

        tracing::info!(
            elapsed = ?elapsed,
            total = report.total_requests(),
            successful = report.successful_requests(),
            transport_failures = report.transport_failures(),
            "Dispatch complete"
        );

        report
    }

    fn reap(joined: Result<(), tokio::task::JoinError>, aggregator: &SharedAggregator) {
        if let Err(e) = joined {
            tracing::warn!(error = %e, "Request task terminated abnormally");
            aggregator.record(RequestOutcome::TransportFailure);
        }
    }
}
