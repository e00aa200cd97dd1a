//! Confstore CLI - Run the conformance suite from a terminal
//!
//! Runs every enabled conformance check against the in-memory reference
//! store and prints the report. The process exits non-zero when the store
//! is not conformant.

use clap::Parser;
use confstore_conformance::ConformanceRunner;
use confstore_store::{ConfigStore, InMemoryConfigStore};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod output;

use config::CliConfig;
use error::{CliError, CliResult};

/// Confstore CLI application
#[derive(Parser)]
#[command(name = "confstore")]
#[command(about = "Configuration store conformance suite", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "CONFSTORE_CONFIG")]
    config: Option<String>,

    /// Namespace the CRUD check runs in
    #[arg(short, long)]
    namespace: Option<String>,

    /// Number of fixtures to create
    #[arg(short, long)]
    fixtures: Option<usize>,

    /// Skip the typed ingestion check
    #[arg(long)]
    skip_ingestion: bool,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    output: output::OutputFormat,

    /// Log level
    #[arg(long, env = "CONFSTORE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "CONFSTORE_LOG_JSON")]
    json: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    // Load config
    let mut config = CliConfig::load(cli.config.as_deref())?;

    // Initialize tracing
    let level = cli.log_level.unwrap_or(config.logging.level.clone());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| level.into());

    if cli.json || config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    // Override with CLI args
    if let Some(namespace) = cli.namespace {
        config.conformance.namespace = namespace;
    }
    if let Some(fixtures) = cli.fixtures {
        config.conformance.fixture_count = fixtures;
    }
    if cli.skip_ingestion {
        config.conformance.run_typed_ingestion = false;
    }
    config.conformance.validate()?;

    tracing::info!(
        namespace = %config.conformance.namespace,
        fixtures = config.conformance.fixture_count,
        ingestion = config.conformance.run_typed_ingestion,
        "running conformance suite"
    );

    let store: Arc<dyn ConfigStore> = Arc::new(InMemoryConfigStore::new());
    let runner = ConformanceRunner::new(config.conformance);
    let report = runner.run(store).await;

    output::print_report(&report, cli.output)?;

    if report.is_conformant() {
        Ok(())
    } else {
        Err(CliError::NotConformant {
            store: report.store_name.clone(),
            failed: report.failed_count(),
        })
    }
}
