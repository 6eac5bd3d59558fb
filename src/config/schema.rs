//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the load generator.
//! All types derive Serde traits for deserialization from config files.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Root configuration for a load test run.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// What to hit and how hard.
    pub target: TargetConfig,

    /// How the final report is rendered.
    pub output: OutputConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Target and load shape.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TargetConfig {
    /// URL every request is sent to (e.g., "http://127.0.0.1:3000/").
    pub url: String,

    /// Total number of GET requests to issue.
    pub requests: usize,

    /// Maximum number of requests in flight at once.
    pub concurrency: usize,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            requests: 100,
            concurrency: 10,
        }
    }
}

/// Report output configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format written to stdout.
    pub format: OutputFormat,
}

/// Supported report formats.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary block.
    #[default]
    Text,
    /// Pretty-printed JSON document.
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Prometheus exporter bind address. Disabled when unset.
    pub metrics_address: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_address: None,
        }
    }
}
