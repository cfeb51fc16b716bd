//! Test pokedexes: canned `Pokedex` implementations for tests.

use std::collections::HashMap;

use async_trait::async_trait;
use pokeparty_core::creature::{Creature, CreatureId};
use pokeparty_core::error::DomainError;
use pokeparty_core::pokedex::Pokedex;

/// A pokedex serving fixed categories and creature details from memory.
#[derive(Debug, Default)]
pub struct StubPokedex {
    types: HashMap<String, Vec<String>>,
    creatures: HashMap<CreatureId, Creature>,
}

impl StubPokedex {
    /// Create an empty stub.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `creatures` as the members of `type_name`. Each member gets
    /// a reference URL shaped like the real API's
    /// (`https://pokeapi.co/api/v2/pokemon/{id}/`).
    #[must_use]
    pub fn with_type(mut self, type_name: &str, creatures: Vec<Creature>) -> Self {
        let refs = creatures
            .iter()
            .map(|c| format!("https://pokeapi.co/api/v2/pokemon/{}/", c.id))
            .collect();
        self.types.insert(type_name.to_owned(), refs);
        for creature in creatures {
            self.creatures.insert(creature.id, creature);
        }
        self
    }
}

#[async_trait]
impl Pokedex for StubPokedex {
    async fn type_member_refs(&self, type_name: &str) -> Result<Vec<String>, DomainError> {
        self.types
            .get(type_name)
            .cloned()
            .ok_or_else(|| DomainError::Upstream(format!("unknown type {type_name}")))
    }

    async fn creature_detail(&self, id: CreatureId) -> Result<Creature, DomainError> {
        self.creatures
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::Upstream(format!("unknown pokemon {id}")))
    }
}

/// A pokedex whose host is unreachable.
#[derive(Debug)]
pub struct FailingPokedex;

#[async_trait]
impl Pokedex for FailingPokedex {
    async fn type_member_refs(&self, _type_name: &str) -> Result<Vec<String>, DomainError> {
        Err(DomainError::Upstream("connection refused".into()))
    }

    async fn creature_detail(&self, _id: CreatureId) -> Result<Creature, DomainError> {
        Err(DomainError::Upstream("connection refused".into()))
    }
}
