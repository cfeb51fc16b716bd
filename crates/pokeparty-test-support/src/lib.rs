//! Shared test mocks and utilities for the Pokeparty roster service.

mod fixtures;
mod pokedex;
mod repository;
mod rng;

pub use fixtures::creature;
pub use pokedex::{FailingPokedex, StubPokedex};
pub use repository::{FailingCreatureRepository, InMemoryCreatureRepository};
pub use rng::{MockRng, SequenceRng};
