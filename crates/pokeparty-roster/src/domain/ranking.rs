//! Stat-based ranking of creatures.
//!
//! All sorts are stable: creatures with equal keys keep the order they
//! were loaded in (ascending id).

use std::cmp::Reverse;

use pokeparty_core::creature::{Creature, CreatureId, StatKind};

/// What a party listing is ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankKey {
    /// Sum of all six base stats.
    Total,
    /// A single base stat.
    Stat(StatKind),
}

impl RankKey {
    /// Parses a `sort` query value, case-insensitively. Unknown values
    /// yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.to_lowercase();
        if raw == "total" {
            return Some(RankKey::Total);
        }
        StatKind::from_name(&raw).map(RankKey::Stat)
    }

    /// The value of this key for `creature`.
    #[must_use]
    pub fn value_of(self, creature: &Creature) -> u64 {
        match self {
            RankKey::Total => creature.total(),
            RankKey::Stat(kind) => u64::from(creature.stat(kind)),
        }
    }
}

/// Direction of a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Lowest first.
    Asc,
    /// Highest first.
    #[default]
    Desc,
}

impl SortOrder {
    /// `asc` (any case) is ascending; anything else is descending.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("asc") {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        }
    }
}

/// Sorts `creatures` in place by `key` in `order`.
pub fn rank(creatures: &mut [Creature], key: RankKey, order: SortOrder) {
    match order {
        SortOrder::Asc => creatures.sort_by_key(|c| key.value_of(c)),
        SortOrder::Desc => creatures.sort_by_key(|c| Reverse(key.value_of(c))),
    }
}

/// Ids of the `limit` creatures with the highest totals. Ties go to the
/// creature that appears first in `creatures`.
#[must_use]
pub fn strongest_ids(creatures: &[Creature], limit: usize) -> Vec<CreatureId> {
    let mut ranked: Vec<&Creature> = creatures.iter().collect();
    ranked.sort_by_key(|c| Reverse(c.total()));
    ranked.into_iter().take(limit).map(|c| c.id).collect()
}
