//! # Skyburst Bench
//!
//! Headless benchmark for the fireworks simulation. Creates a batch of
//! fireworks, ticks the environment until every one has finished, and
//! reports wall time across several runs.
//!
//! Usage: `skyburst-bench [config.toml]`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

use std::path::PathBuf;

use anyhow::Result;
use skyburst_bench::config::BenchConfig;
use skyburst_bench::runner;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Main entry point.
fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("skyburst=info".parse()?))
        .init();

    info!("Skyburst bench starting...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = BenchConfig::load(config_path.as_deref());

    info!(
        fireworks = config.firework_count,
        runs = config.runs,
        pattern = config.pattern.label(),
        "Benchmarking"
    );

    let stats = runner::run(&config)?;

    info!(
        mean_ms = stats.mean_ms(),
        min_ms = stats.min_ms(),
        max_ms = stats.max_ms(),
        timeouts = stats.timeouts(),
        "Average time for {} {} fireworks",
        config.firework_count,
        config.pattern.label()
    );
    Ok(())
}
