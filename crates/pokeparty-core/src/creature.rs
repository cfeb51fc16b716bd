//! The creature record and its stat vocabulary.

use serde::{Deserialize, Serialize};

/// Externally assigned creature identifier (primary key).
pub type CreatureId = i32;

/// Maximum number of creatures that may be in the party at once.
pub const PARTY_CAPACITY: usize = 6;

/// The fixed six-element stat vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatKind {
    /// Hit points.
    Hp,
    /// Physical attack.
    Attack,
    /// Physical defense.
    Defense,
    /// Special attack.
    SpecialAttack,
    /// Special defense.
    SpecialDefense,
    /// Speed.
    Speed,
}

impl StatKind {
    /// Every stat kind, in canonical order.
    pub const ALL: [StatKind; 6] = [
        StatKind::Hp,
        StatKind::Attack,
        StatKind::Defense,
        StatKind::SpecialAttack,
        StatKind::SpecialDefense,
        StatKind::Speed,
    ];

    /// Returns the wire name of this stat.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StatKind::Hp => "hp",
            StatKind::Attack => "attack",
            StatKind::Defense => "defense",
            StatKind::SpecialAttack => "special-attack",
            StatKind::SpecialDefense => "special-defense",
            StatKind::Speed => "speed",
        }
    }

    /// Parses a wire name. Matching is exact; callers lowercase first if needed.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

/// One `(statName, baseValue)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatLine {
    /// Which stat this is.
    pub name: StatKind,
    /// Base value of the stat.
    pub base: u32,
}

/// Which container a creature sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// The active party (`in_box = false`).
    Party,
    /// The overflow box (`in_box = true`).
    Box,
}

impl Placement {
    /// The membership flag value for this placement.
    #[must_use]
    pub fn in_box(self) -> bool {
        matches!(self, Placement::Box)
    }
}

/// A creature record. `in_box` is the sole membership indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    /// Unique identifier.
    pub id: CreatureId,
    /// Display name.
    pub name: String,
    /// Image reference.
    #[serde(default)]
    pub sprite: Option<String>,
    /// Ordered category names.
    #[serde(default)]
    pub types: Vec<String>,
    /// Base stats in source order.
    #[serde(default)]
    pub stats: Vec<StatLine>,
    /// `false` means party, `true` means box.
    #[serde(rename = "box", alias = "inBox", default)]
    pub in_box: bool,
}

impl Creature {
    /// Base value of `kind`, or 0 when the record has no such entry.
    #[must_use]
    pub fn stat(&self, kind: StatKind) -> u32 {
        self.stats
            .iter()
            .find(|line| line.name == kind)
            .map_or(0, |line| line.base)
    }

    /// Sum of all base stat values.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.stats.iter().map(|line| u64::from(line.base)).sum()
    }

    /// Current container of this creature.
    #[must_use]
    pub fn placement(&self) -> Placement {
        if self.in_box {
            Placement::Box
        } else {
            Placement::Party
        }
    }
}
