//! Random creature retrieval endpoint.

use axum::extract::{Query, State};
use axum::{Json, Router, routing::get};
use serde::Deserialize;
use tracing::{info, instrument};

use pokeparty_core::creature::Creature;
use pokeparty_core::error::DomainError;
use pokeparty_fetcher::random::fetch_random_by_type;

use crate::error::ApiError;
use crate::state::AppState;

/// Query string for GET /pokemon.
#[derive(Debug, Deserialize)]
pub struct PokemonQuery {
    /// Category to draw from.
    #[serde(rename = "type")]
    pub type_name: Option<String>,
}

/// GET /pokemon?type=
#[instrument(skip(state))]
async fn random_pokemon(
    State(state): State<AppState>,
    Query(query): Query<PokemonQuery>,
) -> Result<Json<Creature>, ApiError> {
    let type_name = query
        .type_name
        .filter(|t| !t.is_empty())
        .ok_or_else(|| DomainError::Validation("missing ?type= query parameter".to_owned()))?;

    let creature = fetch_random_by_type(&type_name, &*state.pokedex, &state.rng).await?;

    info!(creature_id = creature.id, "fetched random pokemon");
    Ok(Json(creature))
}

/// Returns the random retrieval router.
pub fn router() -> Router<AppState> {
    Router::new().route("/pokemon", get(random_pokemon))
}
