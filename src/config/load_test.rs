//! Immutable per-run configuration handed to the dispatcher.

use crate::config::schema::TargetConfig;
use crate::config::validation::{validate_target, ValidationError};

/// Validated, clamped parameters for a single run.
///
/// The concurrency limit never exceeds the request count. When the supplied
/// limit was larger it is reduced, and the original value is kept so the
/// caller can tell the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTestConfig {
    target_url: String,
    request_count: usize,
    concurrency_limit: usize,
    requested_concurrency: usize,
}

impl LoadTestConfig {
    /// Validate the target settings and build a run configuration.
    pub fn from_target(target: &TargetConfig) -> Result<Self, Vec<ValidationError>> {
        validate_target(target)?;

        Ok(Self {
            target_url: target.url.trim().to_string(),
            request_count: target.requests,
            concurrency_limit: target.concurrency.min(target.requests),
            requested_concurrency: target.concurrency,
        })
    }

    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    pub fn request_count(&self) -> usize {
        self.request_count
    }

    /// Effective concurrency limit after clamping.
    pub fn concurrency_limit(&self) -> usize {
        self.concurrency_limit
    }

    /// The concurrency originally asked for, if it had to be reduced.
    pub fn clamped_from(&self) -> Option<usize> {
        (self.requested_concurrency != self.concurrency_limit).then_some(self.requested_concurrency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(requests: usize, concurrency: usize) -> TargetConfig {
        TargetConfig {
            url: "http://127.0.0.1:9/".into(),
            requests,
            concurrency,
        }
    }

    #[test]
    fn keeps_limit_below_request_count() {
        let config = LoadTestConfig::from_target(&target(10, 3)).unwrap();
        assert_eq!(config.request_count(), 10);
        assert_eq!(config.concurrency_limit(), 3);
        assert_eq!(config.clamped_from(), None);
    }

    #[test]
    fn clamps_limit_to_request_count() {
        let config = LoadTestConfig::from_target(&target(5, 10)).unwrap();
        assert_eq!(config.concurrency_limit(), 5);
        assert_eq!(config.clamped_from(), Some(10));
    }

    #[test]
    fn equal_limit_is_not_clamped() {
        let config = LoadTestConfig::from_target(&target(4, 4)).unwrap();
        assert_eq!(config.concurrency_limit(), 4);
        assert_eq!(config.clamped_from(), None);
    }

    #[test]
    fn invalid_target_is_rejected() {
        let errors = LoadTestConfig::from_target(&target(0, 1)).unwrap_err();
        assert_eq!(errors, vec![ValidationError::ZeroRequests]);
    }

    #[test]
    fn trims_surrounding_whitespace_from_url() {
        let mut t = target(1, 1);
        t.url = "  http://localhost:3000/  ".into();
        let config = LoadTestConfig::from_target(&t).unwrap();
        assert_eq!(config.target_url(), "http://localhost:3000/");
    }
}
