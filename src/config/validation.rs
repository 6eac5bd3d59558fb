//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (request count and concurrency > 0)
//! - Flag targets that will never get a response (malformed or non-http URL)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: TargetConfig → Result<(), Vec<ValidationError>>
//! - Runs before any request is dispatched
//! - A malformed URL is not fatal: every request to it is counted as a
//!   transport failure, so `url_problem` only feeds a warning

use thiserror::Error;
use url::Url;

use crate::config::schema::TargetConfig;

/// A single semantic problem with the target configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("url is required")]
    EmptyUrl,

    #[error("requests must be greater than 0")]
    ZeroRequests,

    #[error("concurrency must be greater than 0")]
    ZeroConcurrency,
}

/// Validate the target section, collecting every error found.
pub fn validate_target(target: &TargetConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if target.url.trim().is_empty() {
        errors.push(ValidationError::EmptyUrl);
    }

    if target.requests == 0 {
        errors.push(ValidationError::ZeroRequests);
    }

    if target.concurrency == 0 {
        errors.push(ValidationError::ZeroConcurrency);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Why requests to `raw` cannot succeed, if that is already known.
pub fn url_problem(raw: &str) -> Option<String> {
    match Url::parse(raw.trim()) {
        Ok(url) => match url.scheme() {
            "http" | "https" => None,
            other => Some(format!("unsupported scheme '{}'", other)),
        },
        Err(e) => Some(e.to_string()),
    }
}
