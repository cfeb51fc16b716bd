//! Test repositories: in-memory `CreatureRepository` implementations.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use pokeparty_core::creature::{Creature, CreatureId};
use pokeparty_core::error::DomainError;
use pokeparty_core::repository::{CreatureFilter, CreatureRepository};

/// A repository that keeps records in a `BTreeMap`, so listings come back in
/// ascending id order like the PostgreSQL implementation.
#[derive(Debug, Default)]
pub struct InMemoryCreatureRepository {
    records: Mutex<BTreeMap<CreatureId, Creature>>,
}

impl InMemoryCreatureRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `creatures`, stored as given
    /// (their `in_box` flags are kept).
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn with_creatures(creatures: impl IntoIterator<Item = Creature>) -> Self {
        let repo = Self::new();
        {
            let mut records = repo.records.lock().unwrap();
            for creature in creatures {
                records.insert(creature.id, creature);
            }
        }
        repo
    }

    /// Returns a snapshot of every stored record in id order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn snapshot(&self) -> Vec<Creature> {
        self.records.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl CreatureRepository for InMemoryCreatureRepository {
    async fn find_many(&self, filter: CreatureFilter) -> Result<Vec<Creature>, DomainError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .values()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect())
    }

    async fn find_unique(&self, id: CreatureId) -> Result<Option<Creature>, DomainError> {
        Ok(self.records.lock().unwrap().get(&id).cloned())
    }

    async fn count(&self, filter: CreatureFilter) -> Result<usize, DomainError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .values()
            .filter(|c| filter.matches(c))
            .count())
    }

    async fn upsert(&self, creature: &Creature) -> Result<Creature, DomainError> {
        self.records
            .lock()
            .unwrap()
            .insert(creature.id, creature.clone());
        Ok(creature.clone())
    }

    async fn set_in_box(&self, id: CreatureId, in_box: bool) -> Result<Creature, DomainError> {
        let mut records = self.records.lock().unwrap();
        let record = records.get_mut(&id).ok_or(DomainError::NotFound(id))?;
        record.in_box = in_box;
        Ok(record.clone())
    }

    async fn delete(&self, id: CreatureId) -> Result<(), DomainError> {
        self.records
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::NotFound(id))
    }

    async fn rebalance_party(&self, party_ids: &[CreatureId]) -> Result<(), DomainError> {
        // One lock for both steps, so no caller observes the all-boxed state.
        let mut records = self.records.lock().unwrap();
        for record in records.values_mut() {
            record.in_box = !party_ids.contains(&record.id);
        }
        Ok(())
    }
}

/// A repository that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingCreatureRepository;

fn connection_refused<T>() -> Result<T, DomainError> {
    Err(DomainError::Infrastructure("connection refused".into()))
}

#[async_trait]
impl CreatureRepository for FailingCreatureRepository {
    async fn find_many(&self, _filter: CreatureFilter) -> Result<Vec<Creature>, DomainError> {
        connection_refused()
    }

    async fn find_unique(&self, _id: CreatureId) -> Result<Option<Creature>, DomainError> {
        connection_refused()
    }

    async fn count(&self, _filter: CreatureFilter) -> Result<usize, DomainError> {
        connection_refused()
    }

    async fn upsert(&self, _creature: &Creature) -> Result<Creature, DomainError> {
        connection_refused()
    }

    async fn set_in_box(&self, _id: CreatureId, _in_box: bool) -> Result<Creature, DomainError> {
        connection_refused()
    }

    async fn delete(&self, _id: CreatureId) -> Result<(), DomainError> {
        connection_refused()
    }

    async fn rebalance_party(&self, _party_ids: &[CreatureId]) -> Result<(), DomainError> {
        connection_refused()
    }
}
