//! Outcome counting.
//!
//! # Responsibilities
//! - Count each outcome exactly once
//! - Keep a running total of HTTP 200 responses
//! - Freeze the counters into a `ReportData`
//!
//! # Design Decisions
//! - Counters live only inside the aggregator; tasks reach them through an
//!   explicit `SharedAggregator` handle, never a global
//! - One short critical section per delivery, no nested locking
//! - Counting is commutative, so delivery order does not matter

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::aggregation::report::ReportData;
use crate::engine::outcome::RequestOutcome;

/// Mutable counters for a run in progress.
#[derive(Debug, Default)]
pub struct Aggregator {
    successful: usize,
    counts: BTreeMap<RequestOutcome, usize>,
    recorded: usize,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: RequestOutcome) {
        if outcome.is_ok() {
            self.successful += 1;
        }
        *self.counts.entry(outcome).or_insert(0) += 1;
        self.recorded += 1;
    }

    /// Outcomes recorded so far.
    pub fn recorded(&self) -> usize {
        self.recorded
    }

    /// Freeze the counters.
    pub fn finish(self, elapsed: Duration, total_requests: usize) -> ReportData {
        if self.recorded != total_requests {
            tracing::error!(
                recorded = self.recorded,
                expected = total_requests,
                "Outcome count does not match request count"
            );
        }

        ReportData {
            elapsed,
            total_requests,
            successful_requests: self.successful,
            status_counts: self.counts,
        }
    }
}

/// Aggregate an already complete set of outcomes.
pub fn aggregate<I>(outcomes: I, elapsed: Duration, total_requests: usize) -> ReportData
where
    I: IntoIterator<Item = RequestOutcome>,
{
    let mut aggregator = Aggregator::new();
    for outcome in outcomes {
        aggregator.record(outcome);
    }
    aggregator.finish(elapsed, total_requests)
}

/// Cloneable handle through which concurrent tasks deliver outcomes.
#[derive(Debug, Clone, Default)]
pub struct SharedAggregator {
    inner: Arc<Mutex<Aggregator>>,
}

impl SharedAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one outcome under exclusive access.
    pub fn record(&self, outcome: RequestOutcome) {
        // A panic cannot happen mid-increment, so a poisoned lock still holds
        // consistent counters.
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record(outcome);
    }

    #[cfg(test)]
    pub(crate) fn recorded(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .recorded()
    }

    /// Take the counters and freeze them into a report.
    ///
    /// Call only after every delivering task has finished.
    pub fn into_report(self, elapsed: Duration, total_requests: usize) -> ReportData {
        let aggregator = {
            let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            std::mem::take(&mut *guard)
        };
        aggregator.finish(elapsed, total_requests)
    }
}
