//! Query handlers for the roster.
//!
//! Every query re-reads persisted state; nothing is served from memory.

use pokeparty_core::creature::Creature;
use pokeparty_core::error::DomainError;
use pokeparty_core::repository::{CreatureFilter, CreatureRepository};
use serde::Serialize;

use crate::domain::ranking::{self, RankKey, SortOrder};

/// Read-only view of both containers.
#[derive(Debug, Clone, Serialize)]
pub struct RosterView {
    /// Party members, ascending by id.
    pub party: Vec<Creature>,
    /// Boxed creatures, ascending by id.
    #[serde(rename = "box")]
    pub boxed: Vec<Creature>,
}

/// Lists the party. Without a ranking the listing is ascending by id;
/// with one it is stably sorted by the ranking key.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the repository fails.
pub async fn list_party(
    ranking: Option<(RankKey, SortOrder)>,
    repo: &dyn CreatureRepository,
) -> Result<Vec<Creature>, DomainError> {
    let mut party = repo.find_many(CreatureFilter::Party).await?;
    if let Some((key, order)) = ranking {
        ranking::rank(&mut party, key, order);
    }
    Ok(party)
}

/// Lists the box, ascending by id.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the repository fails.
pub async fn list_box(repo: &dyn CreatureRepository) -> Result<Vec<Creature>, DomainError> {
    repo.find_many(CreatureFilter::Boxed).await
}

/// Reads the current party and box.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the repository fails.
pub async fn roster_view(repo: &dyn CreatureRepository) -> Result<RosterView, DomainError> {
    let party = repo.find_many(CreatureFilter::Party).await?;
    let boxed = repo.find_many(CreatureFilter::Boxed).await?;
    Ok(RosterView { party, boxed })
}
