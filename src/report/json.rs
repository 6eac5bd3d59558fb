//! Machine-readable report.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::aggregation::ReportData;
use crate::report::{ReportError, ReportSink};

/// Serializable view of a `ReportData`.
#[derive(Debug, Serialize, PartialEq)]
pub struct ReportSummary {
    pub elapsed_ms: f64,
    pub total_requests: usize,
    pub successful_requests: usize,
    pub requests_per_second: f64,
    /// Responses by HTTP status code, 200 included.
    pub status_counts: BTreeMap<u16, usize>,
    pub transport_failures: usize,
}

impl From<&ReportData> for ReportSummary {
    fn from(report: &ReportData) -> Self {
        let status_counts = report
            .status_counts()
            .iter()
            .filter_map(|(outcome, count)| outcome.status().map(|code| (code, *count)))
            .collect();

        Self {
            elapsed_ms: report.elapsed().as_secs_f64() * 1000.0,
            total_requests: report.total_requests(),
            successful_requests: report.successful_requests(),
            requests_per_second: report.requests_per_second(),
            status_counts,
            transport_failures: report.transport_failures(),
        }
    }
}

/// Writes the report as pretty-printed JSON.
pub struct JsonSink<W> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for JsonSink<W> {
    fn emit(&mut self, report: &ReportData) -> Result<(), ReportError> {
        serde_json::to_writer_pretty(&mut self.out, &ReportSummary::from(report))?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
