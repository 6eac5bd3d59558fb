//! Immutable summary of a completed run.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::engine::outcome::RequestOutcome;

/// Aggregate statistics for one run.
///
/// Built once, after every request has produced its outcome. The counts in
/// `status_counts` always add up to `total_requests`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportData {
    pub(crate) elapsed: Duration,
    pub(crate) total_requests: usize,
    pub(crate) successful_requests: usize,
    pub(crate) status_counts: BTreeMap<RequestOutcome, usize>,
}

impl ReportData {
    /// Wall-clock time from first dispatch to last completion.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn total_requests(&self) -> usize {
        self.total_requests
    }

    /// Number of HTTP 200 responses.
    pub fn successful_requests(&self) -> usize {
        self.successful_requests
    }

    pub fn status_counts(&self) -> &BTreeMap<RequestOutcome, usize> {
        &self.status_counts
    }

    /// Occurrences of a single classification.
    pub fn count(&self, outcome: RequestOutcome) -> usize {
        self.status_counts.get(&outcome).copied().unwrap_or(0)
    }

    pub fn transport_failures(&self) -> usize {
        self.count(RequestOutcome::TransportFailure)
    }

    /// Every status code other than 200, in ascending order.
    pub fn other_statuses(&self) -> impl Iterator<Item = (u16, usize)> + '_ {
        self.status_counts
            .iter()
            .filter(|(outcome, _)| !outcome.is_ok())
            .filter_map(|(outcome, count)| outcome.status().map(|code| (code, *count)))
    }

    /// Completed requests per second over the whole run.
    pub fn requests_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.total_requests as f64 / secs
        } else {
            0.0
        }
    }
}
