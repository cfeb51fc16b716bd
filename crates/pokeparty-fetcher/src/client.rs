//! HTTP client for the PokeAPI.
//!
//! Implements the `Pokedex` port with `reqwest`. No timeout, retry, or
//! caching is applied; any failure is reported once as `DomainError::Upstream`.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use pokeparty_core::creature::{Creature, CreatureId};
use pokeparty_core::error::DomainError;
use pokeparty_core::pokedex::Pokedex;

use crate::dto::{PokemonResponse, TypeResponse};
use crate::mapping::map_pokemon;

/// Default base URL of the public PokeAPI.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Client for the PokeAPI REST endpoints.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: Url,
}

impl PokeApiClient {
    /// Creates a client rooted at `base_url` (e.g. `https://pokeapi.co/api/v2`).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `base_url` is not an absolute
    /// http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, DomainError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| DomainError::Validation(format!("invalid PokeAPI base URL: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(DomainError::Validation(format!(
                "PokeAPI base URL cannot be a base: {base_url}"
            )));
        }
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// Builds `{base}/{segments...}`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, DomainError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| DomainError::Upstream("base URL cannot be a base".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, DomainError> {
        debug!(%url, "requesting PokeAPI resource");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DomainError::Upstream(e.to_string()))?
            .error_for_status()
            .map_err(|e| DomainError::Upstream(e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| DomainError::Upstream(e.to_string()))
    }
}

#[async_trait]
impl Pokedex for PokeApiClient {
    async fn type_member_refs(&self, type_name: &str) -> Result<Vec<String>, DomainError> {
        let url = self.endpoint(&["type", type_name])?;
        let body: TypeResponse = self.get_json(url).await?;
        Ok(body
            .pokemon
            .into_iter()
            .map(|member| member.pokemon.url)
            .collect())
    }

    async fn creature_detail(&self, id: CreatureId) -> Result<Creature, DomainError> {
        let url = self.endpoint(&["pokemon", &id.to_string()])?;
        let body: PokemonResponse = self.get_json(url).await?;
        map_pokemon(body)
    }
}
