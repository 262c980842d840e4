//! Arena storage for monsters.
//!
//! The [`MonsterStore`] owns every [`Monster`] for the lifetime of a run, in
//! creation order. Monsters are never removed. Afflictions are stored inside
//! their afflicted monster and refer to other monsters by ID only, so there
//! are no ownership cycles between monsters and their histories.

use tracing::debug;

use crate::config::LedgerConfig;
use crate::ids::MonsterId;
use crate::model::Monster;
use crate::LedgerError;

/// Ordered collection of all monsters in the simulation.
#[derive(Debug, Default)]
pub struct MonsterStore {
    /// All monsters, in creation order.
    monsters: Vec<Monster>,
    /// Defaults applied at creation.
    config: LedgerConfig,
}

impl MonsterStore {
    /// Create an empty store with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given configuration.
    pub const fn with_config(config: LedgerConfig) -> Self {
        Self {
            monsters: Vec::new(),
            config,
        }
    }

    /// Return the number of monsters in the store.
    pub const fn len(&self) -> usize {
        self.monsters.len()
    }

    /// Return whether the store has no monsters.
    pub const fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    /// All monsters, in creation order.
    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    /// Create a monster with a fresh ID and the configured total health.
    ///
    /// Every name and power is accepted, including an empty name and zero
    /// power.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InternalError`] only if the monster cannot be
    /// read back after insertion.
    pub fn create(&mut self, name: impl Into<String>, power: u32) -> Result<&Monster, LedgerError> {
        let monster = Monster::new(name.into(), power, self.config.default_total_health);
        debug!(
            monster = %monster.id(),
            name = monster.name(),
            power,
            total_health = monster.total_health(),
            created_at = %monster.created_at(),
            "monster created"
        );
        self.monsters.push(monster);

        self.monsters.last().ok_or(LedgerError::InternalError(
            "failed to retrieve monster after append",
        ))
    }

    /// Find a monster by ID. Returns `None` for an unknown ID.
    pub fn find(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters.iter().find(|m| m.id() == id)
    }

    pub(crate) fn find_mut(&mut self, id: MonsterId) -> Option<&mut Monster> {
        self.monsters.iter_mut().find(|m| m.id() == id)
    }

    /// Override a monster's total health.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::MonsterNotFound`] if `id` is not in the store.
    pub fn set_total_health(&mut self, id: MonsterId, total_health: u32) -> Result<(), LedgerError> {
        let monster = self.find_mut(id).ok_or(LedgerError::MonsterNotFound(id))?;
        monster.set_total_health(total_health);
        Ok(())
    }

    /// Override a monster's power. Afflictions already recorded keep the
    /// value they were created with.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::MonsterNotFound`] if `id` is not in the store.
    pub fn set_power(&mut self, id: MonsterId, power: u32) -> Result<(), LedgerError> {
        let monster = self.find_mut(id).ok_or(LedgerError::MonsterNotFound(id))?;
        monster.set_power(power);
        Ok(())
    }
}
