//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → command-line overrides applied on top
//!     → validation.rs (semantic checks)
//!     → load_test.rs (clamp concurrency, freeze)
//!     → LoadTestConfig (validated, immutable)
//!     → owned by the dispatcher for one run
//! ```
//!
//! # Design Decisions
//! - Config is immutable once built; nothing outlives a run
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Oversized concurrency is clamped, not rejected

pub mod load_test;
pub mod loader;
pub mod schema;
pub mod validation;

pub use load_test::LoadTestConfig;
pub use loader::{load_config, ConfigError};
pub use schema::{GeneratorConfig, ObservabilityConfig, OutputConfig, OutputFormat, TargetConfig};
pub use validation::{url_problem, ValidationError};
