//! Normalization of upstream payloads into roster records.

use pokeparty_core::creature::{Creature, CreatureId, StatKind, StatLine};
use pokeparty_core::error::DomainError;

use crate::dto::{PokemonResponse, Sprites};

/// Maps a `GET /pokemon/{id}` payload into a `Creature`.
///
/// `in_box` is always `false`; placement is decided by the roster when the
/// record is submitted.
///
/// # Errors
///
/// Returns `DomainError::Upstream` if a stat name is outside the six-stat
/// vocabulary.
pub fn map_pokemon(pokemon: PokemonResponse) -> Result<Creature, DomainError> {
    let stats = pokemon
        .stats
        .iter()
        .map(|entry| {
            StatKind::from_name(&entry.stat.name)
                .map(|name| StatLine {
                    name,
                    base: entry.base_stat,
                })
                .ok_or_else(|| {
                    DomainError::Upstream(format!("unknown stat name {:?}", entry.stat.name))
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Creature {
        id: pokemon.id,
        name: pokemon.name,
        sprite: Some(pick_sprite(pokemon.sprites)),
        types: pokemon.types.into_iter().map(|slot| slot.kind.name).collect(),
        stats,
        in_box: false,
    })
}

/// Official artwork, else the default front image, else the empty string.
fn pick_sprite(sprites: Sprites) -> String {
    let artwork = sprites
        .other
        .and_then(|other| other.official_artwork)
        .and_then(|artwork| artwork.front_default)
        .filter(|url| !url.is_empty());

    artwork
        .or(sprites.front_default.filter(|url| !url.is_empty()))
        .unwrap_or_default()
}

/// Extracts the trailing numeric id from a resource URL such as
/// `https://pokeapi.co/api/v2/pokemon/25/`.
///
/// # Errors
///
/// Returns `DomainError::Upstream` if the last path segment is not an integer.
pub fn member_id_from_ref(reference: &str) -> Result<CreatureId, DomainError> {
    reference
        .split('/')
        .filter(|segment| !segment.is_empty())
        .next_back()
        .and_then(|segment| segment.parse().ok())
        .ok_or_else(|| DomainError::Upstream(format!("malformed member reference {reference:?}")))
}
