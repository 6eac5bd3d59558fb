//! Report rendering subsystem.
//!
//! # Data Flow
//! ```text
//! ReportData (immutable)
//!     → ReportSink chosen by OutputFormat
//!         - text.rs (human-readable block)
//!         - json.rs (machine-readable document)
//!     → stdout
//! ```

pub mod json;
pub mod text;

use std::io::Write;

use thiserror::Error;

use crate::aggregation::ReportData;
use crate::config::OutputFormat;

pub use json::{JsonSink, ReportSummary};
pub use text::TextSink;

/// Errors raised while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Receives the final report of a run.
pub trait ReportSink {
    fn emit(&mut self, report: &ReportData) -> Result<(), ReportError>;
}

/// Build the sink for `format` writing to `out`.
pub fn sink_for<'a, W: Write + 'a>(format: OutputFormat, out: W) -> Box<dyn ReportSink + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextSink::new(out)),
        OutputFormat::Json => Box::new(JsonSink::new(out)),
    }
}
