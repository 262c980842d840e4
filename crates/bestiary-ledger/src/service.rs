//! The affliction service: records damage and healing between monsters.
//!
//! [`AfflictionService`] owns the [`MonsterStore`] and is the only place
//! afflictions are created. Recording an affliction:
//!
//! 1. resolves both participants (failing with
//!    [`LedgerError::InvalidArgument`] before anything is mutated),
//! 2. copies the provocator's current power as the affliction value,
//! 3. computes and assigns the integrity key,
//! 4. appends the affliction to the afflicted monster's list,
//! 5. returns a reference to the stored affliction.
//!
//! Health, death and key validity are all read-only queries over the store.

use tracing::debug;

use crate::config::LedgerConfig;
use crate::health;
use crate::ids::{AfflictionId, MonsterId};
use crate::integrity::{self, IntegrityResult};
use crate::model::{Affliction, AfflictionKind, Monster};
use crate::store::MonsterStore;
use crate::LedgerError;

/// Creates monsters and afflictions and answers health queries.
#[derive(Debug, Default)]
pub struct AfflictionService {
    store: MonsterStore,
}

impl AfflictionService {
    /// Create a service with an empty store and default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service with an empty store using `config`.
    pub const fn with_config(config: LedgerConfig) -> Self {
        Self {
            store: MonsterStore::with_config(config),
        }
    }

    /// All monsters, in creation order.
    pub fn monsters(&self) -> &[Monster] {
        self.store.monsters()
    }

    // -- Monsters -----------------------------------------------------------

    /// Create a monster and add it to the store.
    ///
    /// # Errors
    ///
    /// See [`MonsterStore::create`].
    pub fn create_monster(
        &mut self,
        name: impl Into<String>,
        power: u32,
    ) -> Result<&Monster, LedgerError> {
        self.store.create(name, power)
    }

    /// Find a monster by ID. Returns `None` for an unknown ID.
    pub fn find_monster(&self, id: MonsterId) -> Option<&Monster> {
        self.store.find(id)
    }

    /// Override a monster's total health.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::MonsterNotFound`] if `id` is not in the store.
    pub fn set_total_health(&mut self, id: MonsterId, total_health: u32) -> Result<(), LedgerError> {
        self.store.set_total_health(id, total_health)
    }

    /// Override a monster's power.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::MonsterNotFound`] if `id` is not in the store.
    pub fn set_power(&mut self, id: MonsterId, power: u32) -> Result<(), LedgerError> {
        self.store.set_power(id, power)
    }

    // -- Afflictions --------------------------------------------------------

    /// Record `provocator` damaging `afflicted` by the provocator's power.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidArgument`] if either monster is not in
    /// the store. Nothing is recorded in that case.
    pub fn apply_damage(
        &mut self,
        provocator: MonsterId,
        afflicted: MonsterId,
    ) -> Result<&Affliction, LedgerError> {
        self.record(AfflictionKind::Damaged, provocator, afflicted)
    }

    /// Record `provocator` healing `afflicted` by the provocator's power.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidArgument`] if either monster is not in
    /// the store. Nothing is recorded in that case.
    pub fn apply_heal(
        &mut self,
        provocator: MonsterId,
        afflicted: MonsterId,
    ) -> Result<&Affliction, LedgerError> {
        self.record(AfflictionKind::Healed, provocator, afflicted)
    }

    fn record(
        &mut self,
        kind: AfflictionKind,
        provocator: MonsterId,
        afflicted: MonsterId,
    ) -> Result<&Affliction, LedgerError> {
        let value = self
            .store
            .find(provocator)
            .ok_or(LedgerError::InvalidArgument {
                role: "provocator",
                id: provocator,
            })?
            .power();

        let target = self
            .store
            .find_mut(afflicted)
            .ok_or(LedgerError::InvalidArgument {
                role: "afflicted",
                id: afflicted,
            })?;

        let mut affliction = Affliction::new(provocator, afflicted, kind, value);
        affliction.assign_key(integrity::compute_key(&affliction));

        debug!(
            affliction = %affliction.id(),
            %provocator,
            %afflicted,
            ?kind,
            value,
            created_at = %affliction.created_at(),
            "affliction recorded"
        );

        target
            .push_affliction(affliction)
            .ok_or(LedgerError::InternalError(
                "failed to retrieve affliction after append",
            ))
    }

    /// Find an affliction by ID across every monster's list.
    pub fn find_affliction(&self, id: AfflictionId) -> Option<&Affliction> {
        self.store
            .monsters()
            .iter()
            .flat_map(Monster::afflictions)
            .find(|a| a.id() == id)
    }

    /// Tamper hook: mutable access to a stored affliction.
    ///
    /// Pair with [`Affliction::overwrite_key_for_test`] to simulate an
    /// altered key.
    #[cfg(any(test, feature = "test-hooks"))]
    pub fn affliction_mut_for_test(&mut self, id: AfflictionId) -> Option<&mut Affliction> {
        let owner = self
            .store
            .monsters()
            .iter()
            .find(|m| m.afflictions().iter().any(|a| a.id() == id))
            .map(Monster::id)?;
        self.store.find_mut(owner)?.affliction_mut(id)
    }

    // -- Queries ------------------------------------------------------------

    /// Current health of the monster with the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::MonsterNotFound`] if `id` is not in the store.
    pub fn current_health(&self, id: MonsterId) -> Result<u32, LedgerError> {
        self.store
            .find(id)
            .map(health::current_health)
            .ok_or(LedgerError::MonsterNotFound(id))
    }

    /// Whether the monster with the given ID has zero health.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::MonsterNotFound`] if `id` is not in the store.
    pub fn is_dead(&self, id: MonsterId) -> Result<bool, LedgerError> {
        self.store
            .find(id)
            .map(health::is_dead)
            .ok_or(LedgerError::MonsterNotFound(id))
    }

    /// Whether the affliction's stored key matches its recomputed key.
    pub fn is_key_valid(&self, affliction: &Affliction) -> bool {
        integrity::is_key_valid(affliction)
    }

    /// Audit every stored affliction.
    pub fn audit(&self) -> IntegrityResult {
        integrity::audit(self.store.monsters())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a monster and return its ID.
    fn spawn(service: &mut AfflictionService, name: &str, power: u32) -> MonsterId {
        service
            .create_monster(name, power)
            .map(Monster::id)
            .unwrap_or_default()
    }

    #[test]
    fn create_monster_adds_to_store() {
        let mut service = AfflictionService::new();
        let id = spawn(&mut service, "TestMonster", 100);

        let monster = service.find_monster(id);
        assert_eq!(monster.map(Monster::name), Some("TestMonster"));
        assert_eq!(monster.map(Monster::power), Some(100));
        assert!(service.monsters().iter().any(|m| m.id() == id));
    }

    #[test]
    fn damage_creates_correct_affliction() {
        let mut service = AfflictionService::new();
        let attacker = spawn(&mut service, "Attacker", 50);
        let receiver = spawn(&mut service, "Receiver", 100);

        let affliction = service.apply_damage(attacker, receiver).cloned();
        assert!(affliction.is_ok());
        if let Ok(a) = affliction {
            assert_eq!(a.provocator(), Some(attacker));
            assert_eq!(a.afflicted(), Some(receiver));
            assert_eq!(a.kind(), AfflictionKind::Damaged);
            assert_eq!(a.value(), 50);

            let held = service.find_monster(receiver).map(Monster::afflictions);
            assert_eq!(held, Some(core::slice::from_ref(&a)));
        }
    }

    #[test]
    fn heal_creates_correct_affliction() {
        let mut service = AfflictionService::new();
        let healer = spawn(&mut service, "Healer", 30);
        let receiver = spawn(&mut service, "Receiver", 100);

        let affliction = service.apply_heal(healer, receiver).cloned();
        assert!(affliction.is_ok());
        if let Ok(a) = affliction {
            assert_eq!(a.provocator(), Some(healer));
            assert_eq!(a.afflicted(), Some(receiver));
            assert_eq!(a.kind(), AfflictionKind::Healed);
            assert_eq!(a.value(), 30);
            assert!(service.find_affliction(a.id()).is_some());
        }
    }

    #[test]
    fn unknown_provocator_is_rejected_without_mutation() {
        let mut service = AfflictionService::new();
        let receiver = spawn(&mut service, "Receiver", 10);
        let ghost = MonsterId::new();

        let result = service.apply_damage(ghost, receiver);
        assert!(matches!(
            result,
            Err(LedgerError::InvalidArgument { role: "provocator", id }) if id == ghost
        ));
        assert_eq!(
            service.find_monster(receiver).map(|m| m.afflictions().len()),
            Some(0)
        );
    }

    #[test]
    fn unknown_afflicted_is_rejected() {
        let mut service = AfflictionService::new();
        let healer = spawn(&mut service, "Healer", 10);
        let ghost = MonsterId::new();

        let result = service.apply_heal(healer, ghost);
        assert!(matches!(
            result,
            Err(LedgerError::InvalidArgument { role: "afflicted", .. })
        ));
        assert_eq!(service.audit(), IntegrityResult::Verified { checked: 0 });
    }

    #[test]
    fn value_is_power_at_creation_time() {
        let mut service = AfflictionService::new();
        let attacker = spawn(&mut service, "Attacker", 10);
        let receiver = spawn(&mut service, "Receiver", 10);

        let first = service.apply_damage(attacker, receiver).map(Affliction::id);
        assert!(service.set_power(attacker, 40).is_ok());
        let second = service.apply_damage(attacker, receiver).map(Affliction::value);

        let first_value = first
            .ok()
            .and_then(|id| service.find_affliction(id))
            .map(Affliction::value);
        assert_eq!(first_value, Some(10));
        assert_eq!(second.ok(), Some(40));
        assert_eq!(service.current_health(receiver).ok(), Some(50));
    }

    #[test]
    fn current_health_combines_damage_and_heal() {
        let mut service = AfflictionService::new();
        let monster = spawn(&mut service, "TestMonster", 100);
        assert!(service.set_total_health(monster, 200).is_ok());
        let attacker = spawn(&mut service, "Attacker", 50);
        let healer = spawn(&mut service, "Healer", 30);

        let _ = service.apply_damage(attacker, monster);
        let _ = service.apply_heal(healer, monster);

        assert_eq!(service.current_health(monster).ok(), Some(180));
    }

    #[test]
    fn exact_lethal_damage_kills() {
        let mut service = AfflictionService::new();
        let monster = spawn(&mut service, "TestMonster", 100);
        let attacker = spawn(&mut service, "Attacker", 100);

        let _ = service.apply_damage(attacker, monster);

        assert_eq!(service.is_dead(monster).ok(), Some(true));
        assert_eq!(service.is_dead(attacker).ok(), Some(false));
    }

    #[test]
    fn queries_on_unknown_monster_fail() {
        let service = AfflictionService::new();
        let ghost = MonsterId::new();
        assert!(matches!(
            service.current_health(ghost),
            Err(LedgerError::MonsterNotFound(_))
        ));
        assert!(matches!(
            service.is_dead(ghost),
            Err(LedgerError::MonsterNotFound(_))
        ));
    }

    #[test]
    fn fresh_affliction_key_is_valid() {
        let mut service = AfflictionService::new();
        let attacker = spawn(&mut service, "Attacker", 50);
        let receiver = spawn(&mut service, "Receiver", 100);

        let valid = service
            .apply_damage(attacker, receiver)
            .map(integrity::is_key_valid);
        assert_eq!(valid.ok(), Some(true));
    }

    #[test]
    fn tampered_key_is_detected() {
        let mut service = AfflictionService::new();
        let attacker = spawn(&mut service, "Goblin", 10);
        let receiver = spawn(&mut service, "Orc", 15);
        let id = service
            .apply_damage(attacker, receiver)
            .map(Affliction::id)
            .unwrap_or_default();

        if let Some(stored) = service.affliction_mut_for_test(id) {
            stored.overwrite_key_for_test("invalid_key");
        }

        let valid = service.find_affliction(id).map(|a| service.is_key_valid(a));
        assert_eq!(valid, Some(false));

        let report = service.audit();
        assert!(matches!(
            &report,
            IntegrityResult::Compromised(anomaly)
                if anomaly.invalid_keys.contains(&id) && anomaly.misfiled.is_empty()
        ));
    }

    #[test]
    fn detached_affliction_with_arbitrary_key_is_invalid() {
        let service = AfflictionService::new();
        let mut affliction = Affliction::default();
        affliction.overwrite_key_for_test("invalid_key");
        assert!(!service.is_key_valid(&affliction));
    }

    #[test]
    fn audit_counts_every_affliction() {
        let mut service = AfflictionService::new();
        let a = spawn(&mut service, "A", 5);
        let b = spawn(&mut service, "B", 7);

        let _ = service.apply_damage(a, b);
        let _ = service.apply_heal(b, a);
        let _ = service.apply_damage(a, a);

        assert_eq!(service.audit(), IntegrityResult::Verified { checked: 3 });
    }
}
