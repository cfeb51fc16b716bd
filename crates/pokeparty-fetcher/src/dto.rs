//! Wire types for the PokeAPI responses this crate reads.
//!
//! Only the fields the roster needs are declared; everything else in the
//! upstream payload is ignored.

use serde::Deserialize;

/// A `{ name, url }` reference to another API resource.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    /// Resource name.
    pub name: String,
    /// Resource URL, ending in the resource id.
    pub url: String,
}

/// Response of `GET /type/{name}`.
#[derive(Debug, Deserialize)]
pub struct TypeResponse {
    /// Every creature belonging to the type.
    pub pokemon: Vec<TypeMember>,
}

/// One entry of `TypeResponse::pokemon`.
#[derive(Debug, Deserialize)]
pub struct TypeMember {
    /// Reference to the member creature.
    pub pokemon: NamedResource,
}

/// Response of `GET /pokemon/{id}`.
#[derive(Debug, Deserialize)]
pub struct PokemonResponse {
    /// Creature id.
    pub id: i32,
    /// Creature name.
    pub name: String,
    /// Image references.
    #[serde(default)]
    pub sprites: Sprites,
    /// Category slots, in upstream order.
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    /// Stat entries, in upstream order.
    #[serde(default)]
    pub stats: Vec<StatEntry>,
}

/// Image references of a creature.
#[derive(Debug, Default, Deserialize)]
pub struct Sprites {
    /// Default front image.
    pub front_default: Option<String>,
    /// Alternate artwork collections.
    pub other: Option<OtherSprites>,
}

/// The `sprites.other` collection.
#[derive(Debug, Default, Deserialize)]
pub struct OtherSprites {
    /// High-quality artwork.
    #[serde(rename = "official-artwork")]
    pub official_artwork: Option<Artwork>,
}

/// A single artwork entry.
#[derive(Debug, Default, Deserialize)]
pub struct Artwork {
    /// Front image of the artwork.
    pub front_default: Option<String>,
}

/// One category slot of a creature.
#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    /// The category.
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// One stat entry of a creature.
#[derive(Debug, Deserialize)]
pub struct StatEntry {
    /// Base value.
    pub base_stat: u32,
    /// Which stat.
    pub stat: NamedResource,
}
