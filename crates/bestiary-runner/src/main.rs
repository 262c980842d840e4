//! Demonstration entry point for the Bestiary simulation.
//!
//! Loads a scenario (from `BESTIARY_CONFIG` or the built-in default), plays
//! its encounters through the affliction ledger and prints one line per
//! affliction followed by each reported monster's health.
//!
//! # Architecture
//!
//! ```text
//! config (YAML/env) --> scenario --> AfflictionService --> render --> stdout
//! ```
//!
//! Logs go to stderr so stdout carries only the report.

mod config;
mod error;
mod render;
mod scenario;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::RunnerConfig;

/// Application entry point.
///
/// Initializes logging, loads the scenario configuration, and runs it.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the scenario
/// fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!("bestiary-runner starting");

    let runner_config = RunnerConfig::from_env();
    let config = runner_config.load_scenario()?;
    info!(
        config_path = ?runner_config.config_path,
        monsters = config.roster.len(),
        encounters = config.encounters.len(),
        default_total_health = config.ledger.default_total_health,
        "configuration loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let service = scenario::run(&config, &mut out)?;

    info!(monsters = service.monsters().len(), "scenario complete");
    Ok(())
}
