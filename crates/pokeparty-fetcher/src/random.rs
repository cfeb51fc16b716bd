//! Uniform random pick of a creature by category.

use std::sync::Mutex;

use tracing::{debug, instrument};

use pokeparty_core::creature::{Creature, CreatureId};
use pokeparty_core::error::DomainError;
use pokeparty_core::pokedex::Pokedex;
use pokeparty_core::rng::DeterministicRng;

use crate::mapping::member_id_from_ref;

/// Picks one element of `pool` uniformly at random.
///
/// Returns `None` for an empty pool.
pub fn pick_uniform<T: Copy>(pool: &[T], rng: &mut dyn DeterministicRng) -> Option<T> {
    let last = u32::try_from(pool.len().checked_sub(1)?).ok()?;
    let index = rng.next_u32_range(0, last) as usize;
    pool.get(index).copied()
}

/// Fetches a random creature of category `type_name` (case-insensitive).
///
/// Two sequential lookups are made: the category's member list, then the
/// detail of the chosen member. The returned record always has
/// `in_box = false`.
///
/// The `Mutex` is locked only around the synchronous pick to avoid holding a
/// `MutexGuard` across await points.
///
/// # Errors
///
/// Returns `DomainError::Upstream` if either lookup fails, the category has
/// no members, or a member reference is malformed.
#[instrument(skip(pokedex, rng))]
pub async fn fetch_random_by_type(
    type_name: &str,
    pokedex: &dyn Pokedex,
    rng: &Mutex<dyn DeterministicRng + Send>,
) -> Result<Creature, DomainError> {
    let type_name = type_name.to_lowercase();
    let refs = pokedex.type_member_refs(&type_name).await?;
    let pool = refs
        .iter()
        .map(|r| member_id_from_ref(r))
        .collect::<Result<Vec<CreatureId>, _>>()?;

    let id = {
        let mut rng_guard = rng
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("RNG mutex poisoned: {e}")))?;
        pick_uniform(&pool, &mut *rng_guard)
    }
    .ok_or_else(|| DomainError::Upstream(format!("type {type_name} has no members")))?;

    debug!(pool_size = pool.len(), id, "picked random member");

    let mut creature = pokedex.creature_detail(id).await?;
    creature.in_box = false;
    Ok(creature)
}
