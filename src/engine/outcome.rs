//! Per-request outcome classification.

use std::fmt;

/// The reduced result of one request.
///
/// Ordered so that status codes sort numerically and transport failures
/// come last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RequestOutcome {
    /// An HTTP status line was received.
    Status(u16),
    /// The request failed before any status was obtained.
    TransportFailure,
}

impl RequestOutcome {
    pub const OK: RequestOutcome = RequestOutcome::Status(200);

    pub fn is_ok(&self) -> bool {
        *self == Self::OK
    }

    /// Status code, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestOutcome::Status(code) => Some(*code),
            RequestOutcome::TransportFailure => None,
        }
    }

    /// Low-cardinality label used for metrics.
    pub fn label(&self) -> String {
        match self {
            RequestOutcome::Status(code) => code.to_string(),
            RequestOutcome::TransportFailure => "transport_failure".to_string(),
        }
    }
}

impl fmt::Display for RequestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestOutcome::Status(code) => write!(f, "HTTP {}", code),
            RequestOutcome::TransportFailure => write!(f, "transport failure"),
        }
    }
}
