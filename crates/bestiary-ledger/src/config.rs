//! Tunable defaults for the affliction ledger.
//!
//! The [`LedgerConfig`] struct bundles every default applied when the store
//! creates a monster, so callers (the runner, tests) can override them
//! without touching the store itself.

use serde::Deserialize;

/// Total health given to a monster when none is specified (default: 100).
pub const DEFAULT_TOTAL_HEALTH: u32 = 100;

/// Configuration for monster creation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LedgerConfig {
    /// Baseline health assigned to newly created monsters (default: 100).
    #[serde(default = "default_total_health")]
    pub default_total_health: u32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            default_total_health: DEFAULT_TOTAL_HEALTH,
        }
    }
}

const fn default_total_health() -> u32 {
    DEFAULT_TOTAL_HEALTH
}
