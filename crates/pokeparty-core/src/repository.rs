//! Creature repository abstraction.

use async_trait::async_trait;

use crate::creature::{Creature, CreatureId};
use crate::error::DomainError;

/// Selects which creature records a query touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatureFilter {
    /// Every record.
    All,
    /// Records with `in_box = false`.
    Party,
    /// Records with `in_box = true`.
    Boxed,
}

impl CreatureFilter {
    /// Whether `creature` satisfies this filter.
    #[must_use]
    pub fn matches(self, creature: &Creature) -> bool {
        match self {
            CreatureFilter::All => true,
            CreatureFilter::Party => !creature.in_box,
            CreatureFilter::Boxed => creature.in_box,
        }
    }
}

/// Storage port for creature records.
///
/// Listings are always returned in ascending id order.
#[async_trait]
pub trait CreatureRepository: Send + Sync {
    /// Load every record matching `filter`, ordered by id.
    async fn find_many(&self, filter: CreatureFilter) -> Result<Vec<Creature>, DomainError>;

    /// Load a single record by id.
    async fn find_unique(&self, id: CreatureId) -> Result<Option<Creature>, DomainError>;

    /// Count the records matching `filter`.
    async fn count(&self, filter: CreatureFilter) -> Result<usize, DomainError>;

    /// Write-or-replace a record keyed by its id. Returns the stored record.
    async fn upsert(&self, creature: &Creature) -> Result<Creature, DomainError>;

    /// Set the membership flag of an existing record.
    ///
    /// Returns `DomainError::NotFound` if no record has this id.
    async fn set_in_box(&self, id: CreatureId, in_box: bool) -> Result<Creature, DomainError>;

    /// Permanently delete a record.
    ///
    /// Returns `DomainError::NotFound` if no record has this id.
    async fn delete(&self, id: CreatureId) -> Result<(), DomainError>;

    /// In a single transaction, box every record and then unbox `party_ids`.
    async fn rebalance_party(&self, party_ids: &[CreatureId]) -> Result<(), DomainError>;
}
