//! Error types for the demonstration runner.
//!
//! Uses `thiserror` for typed errors covering configuration, the ledger,
//! and writing the console report.

use bestiary_ledger::LedgerError;

use crate::config::ConfigError;

/// Errors that can occur while running a scenario.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The scenario configuration is inconsistent (duplicate or unknown names).
    #[error("config error: {0}")]
    Config(String),

    /// The scenario configuration file could not be loaded.
    #[error(transparent)]
    ConfigFile(#[from] ConfigError),

    /// The ledger rejected an operation.
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// Writing the report failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}
