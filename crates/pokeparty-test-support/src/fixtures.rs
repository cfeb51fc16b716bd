//! Creature fixtures.

use pokeparty_core::creature::{Creature, CreatureId, StatKind, StatLine};

/// Builds a creature whose six stats are all `base`, so its total is
/// `6 * base`.
#[must_use]
pub fn creature(id: CreatureId, base: u32) -> Creature {
    Creature {
        id,
        name: format!("creature-{id}"),
        sprite: Some(format!("https://img.example/{id}.png")),
        types: vec!["normal".to_owned()],
        stats: StatKind::ALL
            .into_iter()
            .map(|name| StatLine { name, base })
            .collect(),
        in_box: false,
    }
}
