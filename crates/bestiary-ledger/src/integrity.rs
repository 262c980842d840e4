//! Integrity keys for afflictions and the store-wide integrity audit.
//!
//! Every affliction carries a key computed at creation time:
//!
//! ```text
//! key = lowercase_hex(SHA-384(provocator_id ++ afflicted_id ++ affliction_id))
//! ```
//!
//! IDs are concatenated in their hyphenated string form, in exactly that
//! order. A missing participant contributes the empty string, so
//! [`compute_key`] is total. [`is_key_valid`] rejects an affliction with a
//! missing participant before comparing keys.
//!
//! The key is a checksum, not a secret: anyone holding the IDs can recompute
//! it. It detects accidental or careless edits, nothing more.

use std::collections::BTreeSet;

use sha2::{Digest, Sha384};
use tracing::warn;

use crate::ids::{AfflictionId, MonsterId};
use crate::model::{Affliction, Monster};

/// Length of a rendered key: 48 digest bytes, two hex digits each.
pub const KEY_LEN: usize = 96;

/// Compute the integrity key for an affliction from its current fields.
pub fn compute_key(affliction: &Affliction) -> String {
    let mut hasher = Sha384::new();
    hasher.update(id_component(affliction.provocator()).as_bytes());
    hasher.update(id_component(affliction.afflicted()).as_bytes());
    hasher.update(affliction.id().to_string().as_bytes());
    hex::encode(hasher.finalize())
}

/// Return `true` if the stored key matches a fresh recomputation.
///
/// Unlinked afflictions (missing provocator or afflicted), unkeyed
/// afflictions (empty key) and afflictions whose key was overwritten all
/// fail.
pub fn is_key_valid(affliction: &Affliction) -> bool {
    if affliction.provocator().is_none() || affliction.afflicted().is_none() {
        return false;
    }
    affliction.key() == compute_key(affliction)
}

fn id_component(id: Option<MonsterId>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Audit
// ---------------------------------------------------------------------------

/// Afflictions that failed the integrity audit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityAnomaly {
    /// Afflictions whose stored key does not match the recomputed key.
    pub invalid_keys: BTreeSet<AfflictionId>,
    /// Afflictions held in a monster's list whose afflicted party is a
    /// different monster (or nobody).
    pub misfiled: BTreeSet<AfflictionId>,
}

impl IntegrityAnomaly {
    /// Return whether no problems were recorded.
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.invalid_keys.is_empty() && self.misfiled.is_empty()
    }
}

impl core::fmt::Display for IntegrityAnomaly {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "integrity anomaly: {} invalid key(s), {} misfiled affliction(s)",
            self.invalid_keys.len(),
            self.misfiled.len()
        )
    }
}

/// The outcome of auditing every affliction in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityResult {
    /// Every affliction validated and sits in its afflicted monster's list.
    Verified {
        /// Number of afflictions checked.
        checked: usize,
    },
    /// At least one affliction failed.
    Compromised(IntegrityAnomaly),
}

/// Audit every affliction held by the given monsters.
///
/// Checks the stored key of each affliction and that its afflicted party is
/// the monster whose list holds it.
pub fn audit(monsters: &[Monster]) -> IntegrityResult {
    let mut anomaly = IntegrityAnomaly::default();
    let mut checked: usize = 0;

    for monster in monsters {
        for affliction in monster.afflictions() {
            checked = checked.saturating_add(1);

            if !is_key_valid(affliction) {
                warn!(
                    affliction = %affliction.id(),
                    monster = %monster.id(),
                    "affliction key failed validation"
                );
                anomaly.invalid_keys.insert(affliction.id());
            }

            if affliction.afflicted() != Some(monster.id()) {
                warn!(
                    affliction = %affliction.id(),
                    monster = %monster.id(),
                    "affliction filed under a monster other than its afflicted party"
                );
                anomaly.misfiled.insert(affliction.id());
            }
        }
    }

    if anomaly.is_empty() {
        IntegrityResult::Verified { checked }
    } else {
        IntegrityResult::Compromised(anomaly)
    }
}
