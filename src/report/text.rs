//! Human-readable report.

use std::io::Write;

use crate::aggregation::ReportData;
use crate::report::{ReportError, ReportSink};

/// Writes the summary block shown at the end of a run.
pub struct TextSink<W> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for TextSink<W> {
    fn emit(&mut self, report: &ReportData) -> Result<(), ReportError> {
        let out = &mut self.out;

        writeln!(out)?;
        writeln!(out, "--- Load Test Report ---")?;
        writeln!(out, "Total time:          {:?}", report.elapsed())?;
        writeln!(out, "Total requests:      {}", report.total_requests())?;
        writeln!(out, "HTTP 200 responses:  {}", report.successful_requests())?;
        writeln!(out, "Requests/sec:        {:.2}", report.requests_per_second())?;

        let mut others = report.other_statuses().peekable();
        if others.peek().is_some() {
            writeln!(out, "Other status codes:")?;
            for (code, count) in others {
                writeln!(out, "  {}: {}", code, count)?;
            }
        }

        let failures = report.transport_failures();
        if failures > 0 {
            writeln!(out, "Transport failures:  {}", failures)?;
        }

        writeln!(out, "------------------------")?;
        out.flush()?;
        Ok(())
    }
}
