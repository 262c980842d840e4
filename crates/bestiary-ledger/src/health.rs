//! Derived health for monsters.
//!
//! Health is never stored. It is replayed from the monster's affliction list
//! every time it is asked for:
//!
//! ```text
//! raw     = total_health - sum(damage) + sum(healing)
//! current = clamp(raw, 0, total_health)
//! ```
//!
//! Only afflictions whose afflicted party is the monster itself count. Sums
//! are widened to `u64` and saturate, so no history can overflow or panic.

use crate::model::{AfflictionKind, Monster};

/// Sum of damage and healing values that apply to a monster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AfflictionTotals {
    /// Sum of `Damaged` afflictions.
    pub damage: u64,
    /// Sum of `Healed` afflictions.
    pub healing: u64,
}

/// Sum the afflictions in `monster`'s list that target `monster`.
pub fn totals(monster: &Monster) -> AfflictionTotals {
    monster
        .afflictions()
        .iter()
        .filter(|a| a.afflicted() == Some(monster.id()))
        .fold(AfflictionTotals::default(), |mut acc, a| {
            let value = u64::from(a.value());
            match a.kind() {
                AfflictionKind::Damaged => acc.damage = acc.damage.saturating_add(value),
                AfflictionKind::Healed => acc.healing = acc.healing.saturating_add(value),
            }
            acc
        })
}

/// Current health of a monster, clamped to `[0, total_health]`.
pub fn current_health(monster: &Monster) -> u32 {
    let total = monster.total_health();
    let AfflictionTotals { damage, healing } = totals(monster);

    // (total + healing) - damage, floored at zero by the saturating sub.
    let raw = u64::from(total).saturating_add(healing).saturating_sub(damage);
    u32::try_from(raw.min(u64::from(total))).unwrap_or(total)
}

/// A monster is dead when its current health is exactly zero.
pub fn is_dead(monster: &Monster) -> bool {
    current_health(monster) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Affliction;

    fn monster(total_health: u32) -> Monster {
        Monster::new("Goblin".to_owned(), 10, total_health)
    }

    fn hit(target: &mut Monster, kind: AfflictionKind, value: u32) {
        let affliction = Affliction::new(target.id(), target.id(), kind, value);
        let _ = target.push_affliction(affliction);
    }

    #[test]
    fn no_afflictions_is_full_health() {
        let m = monster(20);
        assert_eq!(current_health(&m), 20);
        assert!(!is_dead(&m));
    }

    #[test]
    fn damage_reduces_health() {
        let mut m = monster(20);
        hit(&mut m, AfflictionKind::Damaged, 10);
        assert_eq!(current_health(&m), 10);
    }

    #[test]
    fn overkill_clamps_at_zero() {
        let mut m = monster(20);
        hit(&mut m, AfflictionKind::Damaged, 25);
        assert_eq!(current_health(&m), 0);
        assert!(is_dead(&m));
    }

    #[test]
    fn healing_clamps_at_total_health() {
        let mut m = monster(20);
        hit(&mut m, AfflictionKind::Healed, 10);
        hit(&mut m, AfflictionKind::Healed, 10);
        assert_eq!(current_health(&m), 20);
    }

    #[test]
    fn damage_then_heal_restores() {
        let mut m = monster(20);
        hit(&mut m, AfflictionKind::Damaged, 10);
        hit(&mut m, AfflictionKind::Healed, 10);
        assert_eq!(current_health(&m), 20);
    }

    #[test]
    fn healing_is_summed_before_clamping() {
        // Replay is order-independent: heal banked before damage still counts.
        let mut m = monster(20);
        hit(&mut m, AfflictionKind::Healed, 10);
        hit(&mut m, AfflictionKind::Damaged, 15);
        assert_eq!(current_health(&m), 15);
    }

    #[test]
    fn overkill_absorbs_later_healing() {
        let mut m = monster(20);
        hit(&mut m, AfflictionKind::Damaged, 50);
        hit(&mut m, AfflictionKind::Healed, 10);
        assert_eq!(current_health(&m), 0);
    }

    #[test]
    fn afflictions_for_other_monsters_are_ignored() {
        let mut m = monster(20);
        let elsewhere = crate::ids::MonsterId::new();
        let stray = Affliction::new(m.id(), elsewhere, AfflictionKind::Damaged, 15);
        let _ = m.push_affliction(stray);
        assert_eq!(current_health(&m), 20);
        assert_eq!(totals(&m), AfflictionTotals::default());
    }

    #[test]
    fn huge_histories_do_not_overflow() {
        let mut m = monster(u32::MAX);
        hit(&mut m, AfflictionKind::Healed, u32::MAX);
        hit(&mut m, AfflictionKind::Healed, u32::MAX);
        assert_eq!(current_health(&m), u32::MAX);
        hit(&mut m, AfflictionKind::Damaged, u32::MAX);
        hit(&mut m, AfflictionKind::Damaged, u32::MAX);
        hit(&mut m, AfflictionKind::Damaged, u32::MAX);
        assert_eq!(current_health(&m), 0);
    }

    #[test]
    fn zero_total_health_is_dead() {
        let m = monster(0);
        assert!(is_dead(&m));
    }

    #[test]
    fn repeated_reads_agree() {
        let mut m = monster(100);
        hit(&mut m, AfflictionKind::Damaged, 33);
        assert_eq!(current_health(&m), current_health(&m));
    }
}
