//! External creature-data source abstraction.

use async_trait::async_trait;

use crate::creature::{Creature, CreatureId};
use crate::error::DomainError;

/// Port to the third-party creature-data API.
///
/// Implementations report every failure (unknown category, unreachable
/// host, undecodable body) as `DomainError::Upstream`.
#[async_trait]
pub trait Pokedex: Send + Sync {
    /// Reference URLs of every member of the category `type_name`, in the
    /// order the source returns them.
    async fn type_member_refs(&self, type_name: &str) -> Result<Vec<String>, DomainError>;

    /// Full detail for one creature, normalized to a `Creature` record.
    async fn creature_detail(&self, id: CreatureId) -> Result<Creature, DomainError>;
}
