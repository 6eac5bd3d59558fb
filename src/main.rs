//! HTTP Load Generator (v1)
//!
//! Fires a configured number of GET requests at a target URL, never more than
//! `concurrency` at once, and prints how long it took and which status codes
//! came back.
//!
//! # Architecture Overview
//!
//! ```text
//!   CLI flags ──┐
//!               ├─▶ config ──▶ LoadTestConfig (validated, clamped)
//!   TOML file ──┘                     │
//!                                     ▼
//!                  ┌──────────────────────────────────────┐
//!                  │             dispatcher               │
//!                  │   admission gate (N slots)           │
//!                  │     ├─ task ─▶ executor ─▶ GET ──────┼───▶ Target
//!                  │     ├─ task ─▶ executor ─▶ GET ──────┼───▶ Target
//!                  │     └─ ...                           │
//!                  └──────────────┬───────────────────────┘
//!                                 │ one outcome per request
//!                                 ▼
//!                            aggregator ──▶ ReportData ──▶ report sink ──▶ stdout
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::Instrument;
use uuid::Uuid;

use load_generator::config::{load_config, url_problem, ConfigError, GeneratorConfig, OutputFormat};
use load_generator::observability::{logging, metrics};
use load_generator::report::sink_for;
use load_generator::{Dispatcher, HttpExecutor, LoadTestConfig};

#[derive(Parser, Debug)]
#[command(name = "load-generator", version)]
#[command(about = "Send a batch of GET requests to a URL and summarize the responses", long_about = None)]
struct Cli {
    /// Target URL. A URL that cannot be requested is not rejected; every
    /// request to it is reported as a transport failure.
    #[arg(short, long)]
    url: Option<String>,

    /// Total number of requests [default: 100].
    #[arg(short = 'n', long)]
    requests: Option<usize>,

    /// Maximum number of requests in flight [default: 10].
    #[arg(short, long)]
    concurrency: Option<usize>,

    /// TOML file with the same settings; flags take precedence.
    #[arg(short = 'f', long)]
    config: Option<PathBuf>,

    /// Report format [default: text].
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,

    /// Log level used when RUST_LOG is unset [default: info].
    #[arg(long)]
    log_level: Option<String>,

    /// Expose Prometheus metrics on this address during the run.
    #[arg(long)]
    metrics_address: Option<String>,
}

impl Cli {
    /// Merge defaults, the optional config file and command-line flags.
    fn resolve(self) -> Result<GeneratorConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => GeneratorConfig::default(),
        };

        if let Some(url) = self.url {
            config.target.url = url;
        }
        if let Some(requests) = self.requests {
            config.target.requests = requests;
        }
        if let Some(concurrency) = self.concurrency {
            config.target.concurrency = concurrency;
        }
        if let Some(format) = self.output {
            config.output.format = format;
        }
        if let Some(level) = self.log_level {
            config.observability.log_level = level;
        }
        if let Some(addr) = self.metrics_address {
            config.observability.metrics_address = Some(addr);
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Cli::parse().resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    logging::init_logging(&config.observability.log_level);

    let run_config = match LoadTestConfig::from_target(&config.target).map_err(ConfigError::from) {
        Ok(run_config) => run_config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(requested) = run_config.clamped_from() {
        tracing::warn!(
            requested,
            effective = run_config.concurrency_limit(),
            "Concurrency exceeds request count; reducing it to the request count"
        );
    }

    if let Some(problem) = url_problem(run_config.target_url()) {
        tracing::warn!(
            url = %run_config.target_url(),
            problem = %problem,
            "Target URL cannot be requested; every request will count as a transport failure"
        );
    }

    if let Some(addr) = &config.observability.metrics_address {
        match addr.parse::<SocketAddr>() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics exporter");
                }
            }
            Err(_) => {
                tracing::error!(metrics_address = %addr, "Failed to parse metrics address");
            }
        }
    }

    let run_id = Uuid::new_v4();
    tracing::info!(
        run_id = %run_id,
        url = %run_config.target_url(),
        requests = run_config.request_count(),
        concurrency = run_config.concurrency_limit(),
        "Load test starting"
    );

    let dispatcher = Dispatcher::new(HttpExecutor::new());
    let report = dispatcher
        .run(&run_config)
        .instrument(tracing::info_span!("load_test", run_id = %run_id))
        .await;

    let stdout = std::io::stdout();
    let mut sink = sink_for(config.output.format, stdout.lock());
    if let Err(e) = sink.emit(&report) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
