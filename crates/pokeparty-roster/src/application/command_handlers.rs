//! Command handlers for the roster.
//!
//! Each handler reads the membership state it needs, persists its change
//! through the repository, and re-reads any listings it returns.

use pokeparty_core::command::Command;
use pokeparty_core::creature::{Creature, PARTY_CAPACITY, Placement};
use pokeparty_core::error::DomainError;
use pokeparty_core::repository::{CreatureFilter, CreatureRepository};
use tracing::info;

use crate::application::query_handlers::{RosterView, roster_view};
use crate::domain::commands::{
    DepositCreature, OptimizeParty, PlaceCreature, ReleaseCreature, WithdrawCreature,
};
use crate::domain::ranking::strongest_ids;

/// Result of placing a creature.
#[derive(Debug)]
pub struct PlaceCreatureResult {
    /// Where the creature ended up.
    pub placed: Placement,
    /// The stored record.
    pub creature: Creature,
    /// Party and box after the write.
    pub roster: RosterView,
}

/// Result of moving a creature into the party.
#[derive(Debug)]
pub struct WithdrawCreatureResult {
    /// The updated record.
    pub creature: Creature,
    /// Party and box after the write.
    pub roster: RosterView,
}

/// Handles the `PlaceCreature` command: counts the party, chooses party or
/// box, and write-or-replaces the record with that flag.
///
/// Placement is recomputed on every upsert, so re-saving a boxed creature
/// while the party has room moves it into the party.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the repository fails.
pub async fn handle_place_creature(
    command: &PlaceCreature,
    repo: &dyn CreatureRepository,
) -> Result<PlaceCreatureResult, DomainError> {
    let party_size = repo.count(CreatureFilter::Party).await?;
    let placed = if party_size < PARTY_CAPACITY {
        Placement::Party
    } else {
        Placement::Box
    };

    let mut creature = command.creature.clone();
    creature.in_box = placed.in_box();
    let creature = repo.upsert(&creature).await?;

    info!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        creature_id = creature.id,
        ?placed,
        "creature placed"
    );

    let roster = roster_view(repo).await?;
    Ok(PlaceCreatureResult {
        placed,
        creature,
        roster,
    })
}

/// Handles the `ReleaseCreature` command: permanently deletes a party member.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the creature does not exist or is in
/// the box. Returns `DomainError::Infrastructure` if the repository fails.
pub async fn handle_release_creature(
    command: &ReleaseCreature,
    repo: &dyn CreatureRepository,
) -> Result<(), DomainError> {
    let id = command.creature_id;
    match repo.find_unique(id).await? {
        Some(existing) if !existing.in_box => {}
        _ => return Err(DomainError::NotFound(id)),
    }

    repo.delete(id).await?;

    info!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        creature_id = id,
        "creature released"
    );
    Ok(())
}

/// Handles the `DepositCreature` command: moves a party member to the box.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the creature does not exist or is
/// already boxed. Returns `DomainError::Infrastructure` if the repository
/// fails.
pub async fn handle_deposit_creature(
    command: &DepositCreature,
    repo: &dyn CreatureRepository,
) -> Result<Creature, DomainError> {
    let id = command.creature_id;
    match repo.find_unique(id).await? {
        Some(existing) if !existing.in_box => {}
        _ => return Err(DomainError::NotFound(id)),
    }

    let updated = repo.set_in_box(id, true).await?;

    info!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        creature_id = id,
        "creature deposited"
    );
    Ok(updated)
}

/// Handles the `WithdrawCreature` command: moves a creature into the party.
///
/// The capacity check runs before the existence check, so a full party
/// rejects the command even for an unknown id. A creature already in the
/// party is accepted unchanged.
///
/// # Errors
///
/// Returns `DomainError::CapacityExceeded` if the party already holds six
/// members, `DomainError::NotFound` if the creature does not exist, and
/// `DomainError::Infrastructure` if the repository fails.
pub async fn handle_withdraw_creature(
    command: &WithdrawCreature,
    repo: &dyn CreatureRepository,
) -> Result<WithdrawCreatureResult, DomainError> {
    let id = command.creature_id;
    if repo.count(CreatureFilter::Party).await? >= PARTY_CAPACITY {
        return Err(DomainError::CapacityExceeded {
            capacity: PARTY_CAPACITY,
        });
    }
    if repo.find_unique(id).await?.is_none() {
        return Err(DomainError::NotFound(id));
    }

    let creature = repo.set_in_box(id, false).await?;

    info!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        creature_id = id,
        "creature withdrawn"
    );

    let roster = roster_view(repo).await?;
    Ok(WithdrawCreatureResult { creature, roster })
}

/// Handles the `OptimizeParty` command: ranks every creature by total stats
/// and atomically makes the top six the party and everything else boxed.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the repository fails.
pub async fn handle_optimize_party(
    command: &OptimizeParty,
    repo: &dyn CreatureRepository,
) -> Result<RosterView, DomainError> {
    let all = repo.find_many(CreatureFilter::All).await?;
    let party_ids = strongest_ids(&all, PARTY_CAPACITY);

    repo.rebalance_party(&party_ids).await?;

    info!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        considered = all.len(),
        ?party_ids,
        "party optimized"
    );

    roster_view(repo).await
}

#[cfg(test)]
mod tests {
    use pokeparty_core::creature::{Creature, CreatureId, PARTY_CAPACITY, Placement};
    use pokeparty_core::error::DomainError;
    use pokeparty_test_support::{FailingCreatureRepository, InMemoryCreatureRepository, creature};
    use uuid::Uuid;

    use crate::application::command_handlers::{
        handle_deposit_creature, handle_optimize_party, handle_place_creature,
        handle_release_creature, handle_withdraw_creature,
    };
    use crate::domain::commands::{
        DepositCreature, OptimizeParty, PlaceCreature, ReleaseCreature, WithdrawCreature,
    };

    fn place(creature: Creature) -> PlaceCreature {
        PlaceCreature {
            correlation_id: Uuid::new_v4(),
            creature,
        }
    }

    fn boxed(id: CreatureId, base: u32) -> Creature {
        let mut c = creature(id, base);
        c.in_box = true;
        c
    }

    fn ids(creatures: &[Creature]) -> Vec<CreatureId> {
        creatures.iter().map(|c| c.id).collect()
    }

    fn full_party_repo() -> InMemoryCreatureRepository {
        let mut all: Vec<Creature> = (1..=6).map(|id| creature(id, 10)).collect();
        all.push(boxed(7, 10));
        InMemoryCreatureRepository::with_creatures(all)
    }

    // --- place ---

    #[tokio::test]
    async fn test_place_into_empty_party() {
        let repo = InMemoryCreatureRepository::new();

        let result = handle_place_creature(&place(creature(1, 50)), &repo)
            .await
            .unwrap();

        assert_eq!(result.placed, Placement::Party);
        assert!(!result.creature.in_box);
        assert_eq!(ids(&result.roster.party), vec![1]);
        assert!(result.roster.boxed.is_empty());
    }

    #[tokio::test]
    async fn test_seventh_placement_goes_to_box() {
        let repo = InMemoryCreatureRepository::new();

        for id in 1..=6 {
            let result = handle_place_creature(&place(creature(id, 50)), &repo)
                .await
                .unwrap();
            assert_eq!(result.placed, Placement::Party);
        }
        let result = handle_place_creature(&place(creature(7, 50)), &repo)
            .await
            .unwrap();

        assert_eq!(result.placed, Placement::Box);
        assert!(result.creature.in_box);
        assert_eq!(ids(&result.roster.party), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(ids(&result.roster.boxed), vec![7]);
    }

    #[tokio::test]
    async fn test_party_never_exceeds_capacity_over_many_placements() {
        let repo = InMemoryCreatureRepository::new();

        for id in 1..=20 {
            handle_place_creature(&place(creature(id, 5)), &repo)
                .await
                .unwrap();
            let party = repo.snapshot().into_iter().filter(|c| !c.in_box).count();
            assert!(party <= PARTY_CAPACITY);
        }
        assert_eq!(repo.snapshot().len(), 20);
    }

    #[tokio::test]
    async fn test_place_ignores_incoming_flag() {
        let repo = InMemoryCreatureRepository::new();

        let result = handle_place_creature(&place(boxed(3, 1)), &repo)
            .await
            .unwrap();

        assert_eq!(result.placed, Placement::Party);
        assert!(!result.creature.in_box);
    }

    #[tokio::test]
    async fn test_replacing_boxed_creature_with_room_moves_it_to_party() {
        let repo = InMemoryCreatureRepository::with_creatures(vec![creature(1, 10), boxed(2, 10)]);
        let mut updated = creature(2, 77);
        updated.sprite = Some("new.png".to_owned());

        let result = handle_place_creature(&place(updated), &repo).await.unwrap();

        assert_eq!(result.placed, Placement::Party);
        assert_eq!(result.creature.sprite.as_deref(), Some("new.png"));
        assert_eq!(result.creature.total(), 6 * 77);
        assert_eq!(ids(&result.roster.party), vec![1, 2]);
        assert!(result.roster.boxed.is_empty());
    }

    #[tokio::test]
    async fn test_replacing_party_member_when_full_moves_it_to_box() {
        let repo = full_party_repo();

        let result = handle_place_creature(&place(creature(3, 10)), &repo)
            .await
            .unwrap();

        assert_eq!(result.placed, Placement::Box);
        assert_eq!(ids(&result.roster.party), vec![1, 2, 4, 5, 6]);
        assert_eq!(ids(&result.roster.boxed), vec![3, 7]);
    }

    #[tokio::test]
    async fn test_place_propagates_repository_failure() {
        let result = handle_place_creature(&place(creature(1, 1)), &FailingCreatureRepository).await;

        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    }

    // --- release ---

    #[tokio::test]
    async fn test_release_deletes_party_member() {
        let repo = InMemoryCreatureRepository::with_creatures(vec![creature(1, 1), creature(2, 1)]);
        let command = ReleaseCreature {
            correlation_id: Uuid::new_v4(),
            creature_id: 1,
        };

        handle_release_creature(&command, &repo).await.unwrap();

        assert_eq!(ids(&repo.snapshot()), vec![2]);
    }

    #[tokio::test]
    async fn test_release_missing_creature_is_not_found() {
        let repo = InMemoryCreatureRepository::new();
        let command = ReleaseCreature {
            correlation_id: Uuid::new_v4(),
            creature_id: 42,
        };

        let result = handle_release_creature(&command, &repo).await;

        match result {
            Err(DomainError::NotFound(id)) => assert_eq!(id, 42),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_release_boxed_creature_is_not_found_and_keeps_record() {
        let repo = InMemoryCreatureRepository::with_creatures(vec![boxed(9, 1)]);
        let command = ReleaseCreature {
            correlation_id: Uuid::new_v4(),
            creature_id: 9,
        };

        let result = handle_release_creature(&command, &repo).await;

        assert!(matches!(result, Err(DomainError::NotFound(9))));
        assert_eq!(ids(&repo.snapshot()), vec![9]);
    }

    // --- deposit ---

    #[tokio::test]
    async fn test_deposit_moves_party_member_to_box() {
        let repo = InMemoryCreatureRepository::with_creatures(vec![creature(4, 1)]);
        let command = DepositCreature {
            correlation_id: Uuid::new_v4(),
            creature_id: 4,
        };

        let updated = handle_deposit_creature(&command, &repo).await.unwrap();

        assert_eq!(updated.id, 4);
        assert!(updated.in_box);
        assert!(repo.snapshot()[0].in_box);
    }

    #[tokio::test]
    async fn test_deposit_already_boxed_is_not_found() {
        let repo = InMemoryCreatureRepository::with_creatures(vec![boxed(4, 1)]);
        let command = DepositCreature {
            correlation_id: Uuid::new_v4(),
            creature_id: 4,
        };

        let result = handle_deposit_creature(&command, &repo).await;

        assert!(matches!(result, Err(DomainError::NotFound(4))));
    }

    #[tokio::test]
    async fn test_deposit_missing_is_not_found() {
        let repo = InMemoryCreatureRepository::new();
        let command = DepositCreature {
            correlation_id: Uuid::new_v4(),
            creature_id: 4,
        };

        let result = handle_deposit_creature(&command, &repo).await;

        assert!(matches!(result, Err(DomainError::NotFound(4))));
    }

    // --- withdraw ---

    #[tokio::test]
    async fn test_withdraw_moves_boxed_creature_into_party() {
        let repo = InMemoryCreatureRepository::with_creatures(vec![creature(1, 1), boxed(2, 1)]);
        let command = WithdrawCreature {
            correlation_id: Uuid::new_v4(),
            creature_id: 2,
        };

        let result = handle_withdraw_creature(&command, &repo).await.unwrap();

        assert!(!result.creature.in_box);
        assert_eq!(ids(&result.roster.party), vec![1, 2]);
        assert!(result.roster.boxed.is_empty());
    }

    #[tokio::test]
    async fn test_withdraw_into_full_party_is_capacity_exceeded() {
        let repo = full_party_repo();
        let command = WithdrawCreature {
            correlation_id: Uuid::new_v4(),
            creature_id: 7,
        };

        let result = handle_withdraw_creature(&command, &repo).await;

        match result {
            Err(DomainError::CapacityExceeded { capacity }) => assert_eq!(capacity, 6),
            other => panic!("expected CapacityExceeded, got {other:?}"),
        }
        assert!(repo.snapshot().iter().any(|c| c.id == 7 && c.in_box));
    }

    #[tokio::test]
    async fn test_withdraw_unknown_id_into_full_party_is_capacity_exceeded() {
        let repo = full_party_repo();
        let command = WithdrawCreature {
            correlation_id: Uuid::new_v4(),
            creature_id: 999,
        };

        let result = handle_withdraw_creature(&command, &repo).await;

        assert!(matches!(result, Err(DomainError::CapacityExceeded { .. })));
    }

    #[tokio::test]
    async fn test_withdraw_unknown_id_is_not_found() {
        let repo = InMemoryCreatureRepository::new();
        let command = WithdrawCreature {
            correlation_id: Uuid::new_v4(),
            creature_id: 999,
        };

        let result = handle_withdraw_creature(&command, &repo).await;

        assert!(matches!(result, Err(DomainError::NotFound(999))));
    }

    #[tokio::test]
    async fn test_withdraw_party_member_is_accepted_unchanged() {
        let repo = InMemoryCreatureRepository::with_creatures(vec![creature(1, 1)]);
        let command = WithdrawCreature {
            correlation_id: Uuid::new_v4(),
            creature_id: 1,
        };

        let result = handle_withdraw_creature(&command, &repo).await.unwrap();

        assert!(!result.creature.in_box);
        assert_eq!(ids(&result.roster.party), vec![1]);
    }

    // --- optimize ---

    #[tokio::test]
    async fn test_optimize_selects_six_strongest() {
        let repo = InMemoryCreatureRepository::with_creatures(vec![
            creature(1, 10),
            creature(2, 20),
            creature(3, 30),
            creature(4, 40),
            creature(5, 50),
            creature(6, 60),
            boxed(7, 70),
            boxed(8, 80),
            boxed(9, 5),
        ]);
        let command = OptimizeParty {
            correlation_id: Uuid::new_v4(),
        };

        let roster = handle_optimize_party(&command, &repo).await.unwrap();

        assert_eq!(ids(&roster.party), vec![3, 4, 5, 6, 7, 8]);
        assert_eq!(ids(&roster.boxed), vec![1, 2, 9]);
    }

    #[tokio::test]
    async fn test_optimize_breaks_ties_by_id_order() {
        let all: Vec<Creature> = (1..=8).map(|id| boxed(id, 10)).collect();
        let repo = InMemoryCreatureRepository::with_creatures(all);
        let command = OptimizeParty {
            correlation_id: Uuid::new_v4(),
        };

        let roster = handle_optimize_party(&command, &repo).await.unwrap();

        assert_eq!(ids(&roster.party), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(ids(&roster.boxed), vec![7, 8]);
    }

    #[tokio::test]
    async fn test_optimize_with_fewer_than_six_unboxes_everything() {
        let repo = InMemoryCreatureRepository::with_creatures(vec![boxed(1, 1), boxed(2, 2)]);
        let command = OptimizeParty {
            correlation_id: Uuid::new_v4(),
        };

        let roster = handle_optimize_party(&command, &repo).await.unwrap();

        assert_eq!(ids(&roster.party), vec![1, 2]);
        assert!(roster.boxed.is_empty());
    }

    #[tokio::test]
    async fn test_optimize_on_empty_roster() {
        let repo = InMemoryCreatureRepository::new();
        let command = OptimizeParty {
            correlation_id: Uuid::new_v4(),
        };

        let roster = handle_optimize_party(&command, &repo).await.unwrap();

        assert!(roster.party.is_empty());
        assert!(roster.boxed.is_empty());
    }
}
