//! Plays a configured scenario against the affliction ledger.
//!
//! The scenario creates the roster, plays every encounter in order, prints a
//! line per affliction, then prints the health of each reported monster.
//! Monsters are referenced by name in the configuration and resolved to IDs
//! here; duplicate and unknown names are configuration errors.

use std::collections::BTreeMap;
use std::io::Write;

use bestiary_ledger::{AfflictionService, IntegrityResult, MonsterId};
use tracing::{info, warn};

use crate::config::{EncounterKind, SimulationConfig};
use crate::error::RunnerError;
use crate::render;

/// Run `config` to completion, writing the report to `out`.
///
/// Returns the service so callers can inspect the final state.
///
/// # Errors
///
/// Returns [`RunnerError::Config`] for duplicate roster names or encounters
/// naming unknown monsters, [`RunnerError::Ledger`] if the ledger rejects an
/// operation, and [`RunnerError::Io`] if writing fails.
pub fn run(config: &SimulationConfig, out: &mut impl Write) -> Result<AfflictionService, RunnerError> {
    let mut service = AfflictionService::with_config(config.ledger.clone());
    let names = spawn_roster(config, &mut service)?;

    if config.show_roster {
        for monster in service.monsters() {
            writeln!(out, "{}", render::roster_block(monster))?;
        }
    }

    for encounter in &config.encounters {
        let provocator = resolve(&names, &encounter.provocator)?;
        let afflicted = resolve(&names, &encounter.afflicted)?;

        let affliction = match encounter.kind {
            EncounterKind::Damage => service.apply_damage(provocator, afflicted)?,
            EncounterKind::Heal => service.apply_heal(provocator, afflicted)?,
        };
        writeln!(
            out,
            "{}",
            render::affliction_line(&encounter.provocator, &encounter.afflicted, affliction)
        )?;
    }

    for name in config.report_names() {
        let id = resolve(&names, name)?;
        let health = service.current_health(id)?;
        writeln!(out, "{}", render::health_line(name, health))?;
    }

    match service.audit() {
        IntegrityResult::Verified { checked } => {
            info!(checked, "affliction integrity verified");
        }
        IntegrityResult::Compromised(anomaly) => {
            warn!(%anomaly, "affliction integrity compromised");
        }
    }

    Ok(service)
}

/// Create every roster monster and map names to IDs.
fn spawn_roster(
    config: &SimulationConfig,
    service: &mut AfflictionService,
) -> Result<BTreeMap<String, MonsterId>, RunnerError> {
    let mut names = BTreeMap::new();

    for spec in &config.roster {
        if names.contains_key(&spec.name) {
            return Err(RunnerError::Config(format!(
                "duplicate monster name in roster: {}",
                spec.name
            )));
        }

        let id = service.create_monster(spec.name.clone(), spec.power)?.id();
        if let Some(total_health) = spec.total_health {
            service.set_total_health(id, total_health)?;
        }
        names.insert(spec.name.clone(), id);
    }

    Ok(names)
}

fn resolve(names: &BTreeMap<String, MonsterId>, name: &str) -> Result<MonsterId, RunnerError> {
    names
        .get(name)
        .copied()
        .ok_or_else(|| RunnerError::Config(format!("unknown monster name: {name}")))
}
