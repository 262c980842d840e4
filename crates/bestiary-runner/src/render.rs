//! Console formatting for scenario output.
//!
//! Pure functions only: every value printed here has already been computed
//! by the ledger.

use bestiary_ledger::{Affliction, AfflictionKind, Monster};

/// Past-tense verb used when describing an affliction.
pub const fn verb(kind: AfflictionKind) -> &'static str {
    match kind {
        AfflictionKind::Damaged => "damaged",
        AfflictionKind::Healed => "healed",
    }
}

/// `"<provocator> damaged <afflicted> by <value> points."`
pub fn affliction_line(provocator: &str, afflicted: &str, affliction: &Affliction) -> String {
    format!(
        "{provocator} {} {afflicted} by {} points.",
        verb(affliction.kind()),
        affliction.value()
    )
}

/// `"<name> Health: <health>"`
pub fn health_line(name: &str, health: u32) -> String {
    format!("{name} Health: {health}")
}

/// Multi-line roster entry. Written with `writeln!`, it ends in a blank line.
pub fn roster_block(monster: &Monster) -> String {
    format!(
        "Monster: {}\nHealth: {}\nPower: {}\n",
        monster.name(),
        monster.total_health(),
        monster.power()
    )
}

#[cfg(test)]
mod tests {
    use bestiary_ledger::AfflictionService;

    use super::*;

    #[test]
    fn verbs_match_kind() {
        assert_eq!(verb(AfflictionKind::Damaged), "damaged");
        assert_eq!(verb(AfflictionKind::Healed), "healed");
    }

    #[test]
    fn affliction_line_format() {
        let mut service = AfflictionService::new();
        let weak = service.create_monster("Weak", 25).map(Monster::id);
        let strong = service.create_monster("Strong", 110).map(Monster::id);
        assert!(weak.is_ok() && strong.is_ok());

        if let (Ok(w), Ok(s)) = (weak, strong) {
            let line = service
                .apply_damage(w, s)
                .map(|a| affliction_line("Weak", "Strong", a));
            assert_eq!(line.ok().as_deref(), Some("Weak damaged Strong by 25 points."));

            let line = service
                .apply_heal(w, s)
                .map(|a| affliction_line("Weak", "Strong", a));
            assert_eq!(line.ok().as_deref(), Some("Weak healed Strong by 25 points."));
        }
    }

    #[test]
    fn health_line_format() {
        assert_eq!(health_line("Strong", 60), "Strong Health: 60");
    }

    #[test]
    fn roster_block_format() {
        let mut service = AfflictionService::new();
        let block = service.create_monster("Healer", 10).map(roster_block).ok();
        assert_eq!(
            block.as_deref(),
            Some("Monster: Healer\nHealth: 100\nPower: 10\n")
        );
    }
}
