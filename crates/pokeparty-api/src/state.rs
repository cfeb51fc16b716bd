//! Shared application state.

use std::sync::{Arc, Mutex};

use pokeparty_core::pokedex::Pokedex;
use pokeparty_core::repository::CreatureRepository;
use pokeparty_core::rng::DeterministicRng;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Creature persistence.
    pub creature_repository: Arc<dyn CreatureRepository>,
    /// External creature-data source.
    pub pokedex: Arc<dyn Pokedex>,
    /// RNG for random creature selection.
    pub rng: Arc<Mutex<dyn DeterministicRng + Send>>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        creature_repository: Arc<dyn CreatureRepository>,
        pokedex: Arc<dyn Pokedex>,
        rng: Arc<Mutex<dyn DeterministicRng + Send>>,
    ) -> Self {
        Self {
            creature_repository,
            pokedex,
            rng,
        }
    }
}
