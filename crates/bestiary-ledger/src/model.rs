//! Monsters and the afflictions recorded against them.
//!
//! A [`Monster`] owns the ordered list of [`Affliction`]s in which it is the
//! afflicted party. Afflictions refer to their participants by [`MonsterId`]
//! only; resolving an ID back to a monster always goes through the
//! [`MonsterStore`](crate::store::MonsterStore).
//!
//! Neither type exposes public setters for identity fields. Construction and
//! key assignment happen inside this crate so that a stored affliction is
//! effectively immutable once keyed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{AfflictionId, MonsterId};

// ---------------------------------------------------------------------------
// Affliction kind
// ---------------------------------------------------------------------------

/// Whether an affliction takes health away or gives it back.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum AfflictionKind {
    /// Subtracts the affliction value from the afflicted monster's health.
    #[default]
    Damaged,
    /// Adds the affliction value back, up to the monster's total health.
    Healed,
}

// ---------------------------------------------------------------------------
// Affliction
// ---------------------------------------------------------------------------

/// One damage or heal event caused by a provocator and suffered by an
/// afflicted monster.
///
/// Afflictions produced by the service always carry both participants and a
/// key. [`Affliction::default`] yields an unlinked, unkeyed record, which
/// never validates, whatever key it is later given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Affliction {
    id: AfflictionId,
    provocator: Option<MonsterId>,
    afflicted: Option<MonsterId>,
    kind: AfflictionKind,
    value: u32,
    key: String,
    created_at: DateTime<Utc>,
}

impl Affliction {
    /// Build an unkeyed affliction between two participants.
    pub(crate) fn new(
        provocator: MonsterId,
        afflicted: MonsterId,
        kind: AfflictionKind,
        value: u32,
    ) -> Self {
        Self {
            id: AfflictionId::new(),
            provocator: Some(provocator),
            afflicted: Some(afflicted),
            kind,
            value,
            key: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Unique identifier of this affliction.
    pub const fn id(&self) -> AfflictionId {
        self.id
    }

    /// The monster that caused the affliction, if linked.
    pub const fn provocator(&self) -> Option<MonsterId> {
        self.provocator
    }

    /// The monster that suffered the affliction, if linked.
    pub const fn afflicted(&self) -> Option<MonsterId> {
        self.afflicted
    }

    /// Damage or heal.
    pub const fn kind(&self) -> AfflictionKind {
        self.kind
    }

    /// Magnitude, copied from the provocator's power at creation time.
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// The stored integrity key. Empty until the service assigns one.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Wall-clock time the affliction was built.
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn assign_key(&mut self, key: String) {
        self.key = key;
    }

    /// Tamper hook: replace the stored key after creation.
    ///
    /// Only compiled for tests (or with the `test-hooks` feature). Used to
    /// check that [`is_key_valid`](crate::integrity::is_key_valid) notices
    /// an altered key.
    #[cfg(any(test, feature = "test-hooks"))]
    pub fn overwrite_key_for_test(&mut self, key: impl Into<String>) {
        self.key = key.into();
    }
}

impl Default for Affliction {
    fn default() -> Self {
        Self {
            id: AfflictionId::new(),
            provocator: None,
            afflicted: None,
            kind: AfflictionKind::default(),
            value: 0,
            key: String::new(),
            created_at: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// Monster
// ---------------------------------------------------------------------------

/// A participant in the simulation.
///
/// Current health is never stored; it is derived from [`Monster::afflictions`]
/// by [`health::current_health`](crate::health::current_health).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Monster {
    id: MonsterId,
    name: String,
    total_health: u32,
    power: u32,
    afflictions: Vec<Affliction>,
    created_at: DateTime<Utc>,
}

impl Monster {
    pub(crate) fn new(name: String, power: u32, total_health: u32) -> Self {
        Self {
            id: MonsterId::new(),
            name,
            total_health,
            power,
            afflictions: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Unique identifier of this monster.
    pub const fn id(&self) -> MonsterId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Baseline health: the upper bound current health can reach.
    pub const fn total_health(&self) -> u32 {
        self.total_health
    }

    /// Magnitude of every affliction this monster provokes.
    pub const fn power(&self) -> u32 {
        self.power
    }

    /// Afflictions suffered by this monster, oldest first.
    pub fn afflictions(&self) -> &[Affliction] {
        &self.afflictions
    }

    /// Wall-clock time the monster was created.
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) const fn set_total_health(&mut self, total_health: u32) {
        self.total_health = total_health;
    }

    pub(crate) const fn set_power(&mut self, power: u32) {
        self.power = power;
    }

    /// Append an affliction and return a reference to the stored value.
    pub(crate) fn push_affliction(&mut self, affliction: Affliction) -> Option<&Affliction> {
        self.afflictions.push(affliction);
        self.afflictions.last()
    }

    #[cfg(any(test, feature = "test-hooks"))]
    pub(crate) fn affliction_mut(&mut self, id: AfflictionId) -> Option<&mut Affliction> {
        self.afflictions.iter_mut().find(|a| a.id == id)
    }
}
