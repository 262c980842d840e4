//! Configuration for the demonstration runner.
//!
//! A scenario is described in YAML: which monsters exist, which encounters
//! happen between them (by name), and whose health is reported at the end.
//! Every field has a default, and the defaults reproduce the classic
//! Weak/Healer/Strong demonstration.
//!
//! The file location comes from the environment:
//!
//! - `BESTIARY_CONFIG` -- path to a scenario YAML file (optional; built-in
//!   defaults are used when unset)

use std::path::{Path, PathBuf};

use bestiary_ledger::LedgerConfig;
use serde::Deserialize;

/// Environment variable naming the scenario file.
pub const CONFIG_ENV_VAR: &str = "BESTIARY_CONFIG";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

// ---------------------------------------------------------------------------
// Runner configuration (environment)
// ---------------------------------------------------------------------------

/// Where the runner finds its scenario.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Path to the scenario YAML file, if one was given.
    pub config_path: Option<PathBuf>,
}

impl RunnerConfig {
    /// Load runner settings from environment variables.
    pub fn from_env() -> Self {
        Self {
            config_path: std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from),
        }
    }

    /// Load the scenario: from the configured file, or the built-in default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load_scenario(&self) -> Result<SimulationConfig, ConfigError> {
        self.config_path
            .as_deref()
            .map_or_else(|| Ok(SimulationConfig::default()), SimulationConfig::from_file)
    }
}

// ---------------------------------------------------------------------------
// Scenario configuration (YAML)
// ---------------------------------------------------------------------------

/// Top-level scenario configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// Defaults applied by the ledger when creating monsters.
    #[serde(default)]
    pub ledger: LedgerConfig,

    /// Monsters to create, in order.
    #[serde(default = "default_roster")]
    pub roster: Vec<MonsterSpec>,

    /// Encounters to play out, in order.
    #[serde(default = "default_encounters")]
    pub encounters: Vec<EncounterSpec>,

    /// Names whose health is printed at the end. Defaults to Strong, Weak,
    /// Healer; `null` reports the whole roster in order.
    #[serde(default = "default_report")]
    pub report: Option<Vec<String>>,

    /// Print every monster's stats before the encounters.
    #[serde(default)]
    pub show_roster: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            ledger: LedgerConfig::default(),
            roster: default_roster(),
            encounters: default_encounters(),
            report: default_report(),
            show_roster: false,
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Names to report on, in order.
    pub fn report_names(&self) -> Vec<&str> {
        self.report.as_ref().map_or_else(
            || self.roster.iter().map(|m| m.name.as_str()).collect(),
            |names| names.iter().map(String::as_str).collect(),
        )
    }
}

/// A monster to create.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MonsterSpec {
    /// Display name; must be unique within the roster.
    pub name: String,
    /// Magnitude of every affliction this monster provokes.
    pub power: u32,
    /// Overrides the ledger's default total health.
    #[serde(default)]
    pub total_health: Option<u32>,
}

/// Which way an encounter moves health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncounterKind {
    /// The provocator damages the afflicted monster.
    Damage,
    /// The provocator heals the afflicted monster.
    Heal,
}

/// One encounter between two roster monsters, referenced by name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EncounterSpec {
    /// Damage or heal.
    pub kind: EncounterKind,
    /// Name of the monster causing the affliction.
    pub provocator: String,
    /// Name of the monster suffering it.
    pub afflicted: String,
}

fn monster(name: &str, power: u32) -> MonsterSpec {
    MonsterSpec {
        name: name.to_owned(),
        power,
        total_health: None,
    }
}

fn encounter(kind: EncounterKind, provocator: &str, afflicted: &str) -> EncounterSpec {
    EncounterSpec {
        kind,
        provocator: provocator.to_owned(),
        afflicted: afflicted.to_owned(),
    }
}

fn default_roster() -> Vec<MonsterSpec> {
    vec![
        monster("Weak", 25),
        monster("Healer", 10),
        monster("Strong", 110),
    ]
}

fn default_encounters() -> Vec<EncounterSpec> {
    vec![
        encounter(EncounterKind::Damage, "Weak", "Strong"),
        encounter(EncounterKind::Damage, "Weak", "Strong"),
        encounter(EncounterKind::Heal, "Healer", "Strong"),
        encounter(EncounterKind::Damage, "Strong", "Weak"),
        encounter(EncounterKind::Damage, "Strong", "Healer"),
    ]
}

#[allow(clippy::unnecessary_wraps)]
fn default_report() -> Option<Vec<String>> {
    Some(
        ["Strong", "Weak", "Healer"]
            .into_iter()
            .map(str::to_owned)
            .collect(),
    )
}
