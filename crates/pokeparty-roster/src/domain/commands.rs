//! Commands for the roster.

use pokeparty_core::command::Command;
use pokeparty_core::creature::{Creature, CreatureId};
use uuid::Uuid;

/// Command to upsert a creature, placing it in the party if there is room
/// and in the box otherwise.
#[derive(Debug, Clone)]
pub struct PlaceCreature {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The full creature payload. Its incoming `in_box` flag is ignored.
    pub creature: Creature,
}

impl Command for PlaceCreature {
    fn command_type(&self) -> &'static str {
        "roster.place_creature"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to permanently remove a party member.
#[derive(Debug, Clone)]
pub struct ReleaseCreature {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The creature identifier.
    pub creature_id: CreatureId,
}

impl Command for ReleaseCreature {
    fn command_type(&self) -> &'static str {
        "roster.release_creature"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to move a party member into the box.
#[derive(Debug, Clone)]
pub struct DepositCreature {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The creature identifier.
    pub creature_id: CreatureId,
}

impl Command for DepositCreature {
    fn command_type(&self) -> &'static str {
        "roster.deposit_creature"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to move a creature into the party.
#[derive(Debug, Clone)]
pub struct WithdrawCreature {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The creature identifier.
    pub creature_id: CreatureId,
}

impl Command for WithdrawCreature {
    fn command_type(&self) -> &'static str {
        "roster.withdraw_creature"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to rebuild the party from the six highest stat totals.
#[derive(Debug, Clone)]
pub struct OptimizeParty {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for OptimizeParty {
    fn command_type(&self) -> &'static str {
        "roster.optimize_party"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
