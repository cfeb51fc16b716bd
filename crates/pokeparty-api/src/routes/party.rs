//! Routes for the party: listing, placement, release, withdrawal, and
//! optimization.

use axum::extract::{Path, Query, State};
use axum::{
    Json, Router,
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use pokeparty_core::creature::{Creature, CreatureId, Placement};
use pokeparty_roster::application::query_handlers::RosterView;
use pokeparty_roster::application::{command_handlers, query_handlers};
use pokeparty_roster::domain::commands;
use pokeparty_roster::domain::ranking::{RankKey, SortOrder};

use crate::error::ApiError;
use crate::state::AppState;

/// Query string for GET /party.
#[derive(Debug, Deserialize)]
pub struct PartyQuery {
    /// `total` or one of the six stat names; anything else lists by id.
    pub sort: Option<String>,
    /// `asc` or `desc` (default).
    pub order: Option<String>,
}

impl PartyQuery {
    fn ranking(&self) -> Option<(RankKey, SortOrder)> {
        let key = RankKey::parse(self.sort.as_deref()?)?;
        let order = self
            .order
            .as_deref()
            .map_or(SortOrder::default(), SortOrder::parse);
        Some((key, order))
    }
}

/// Response body for POST /party.
#[derive(Debug, Serialize)]
pub struct PlaceResponse {
    /// Always `true`.
    pub success: bool,
    /// Where the creature was placed.
    pub placed: Placement,
    /// The stored record.
    pub pokemon: Creature,
    /// Party and box after the write.
    #[serde(flatten)]
    pub roster: RosterView,
}

/// Response body for POST /party/{id}/move.
#[derive(Debug, Serialize)]
pub struct MoveResponse {
    /// Always `true`.
    pub success: bool,
    /// The updated record.
    pub pokemon: Creature,
    /// Party and box after the write.
    #[serde(flatten)]
    pub roster: RosterView,
}

/// Response body for POST /party/optimize.
#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    /// Always `true`.
    pub success: bool,
    /// Party and box after the rebalance.
    #[serde(flatten)]
    pub roster: RosterView,
}

/// Response body for DELETE /party/{id}.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    /// Always `true`.
    pub success: bool,
}

/// GET /party
#[instrument(skip(state))]
async fn list_party(
    State(state): State<AppState>,
    Query(query): Query<PartyQuery>,
) -> Result<Json<Vec<Creature>>, ApiError> {
    let party = query_handlers::list_party(query.ranking(), &*state.creature_repository).await?;
    Ok(Json(party))
}

/// POST /party
#[instrument(skip(state, creature), fields(creature_id = creature.id))]
async fn place_creature(
    State(state): State<AppState>,
    Json(creature): Json<Creature>,
) -> Result<Json<PlaceResponse>, ApiError> {
    let command = commands::PlaceCreature {
        correlation_id: Uuid::new_v4(),
        creature,
    };

    info!(correlation_id = %command.correlation_id, "handling place_creature command");

    let result =
        command_handlers::handle_place_creature(&command, &*state.creature_repository).await?;

    Ok(Json(PlaceResponse {
        success: true,
        placed: result.placed,
        pokemon: result.creature,
        roster: result.roster,
    }))
}

/// DELETE /party/{id}
#[instrument(skip(state))]
async fn release_creature(
    State(state): State<AppState>,
    Path(creature_id): Path<CreatureId>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let command = commands::ReleaseCreature {
        correlation_id: Uuid::new_v4(),
        creature_id,
    };

    info!(correlation_id = %command.correlation_id, "handling release_creature command");

    command_handlers::handle_release_creature(&command, &*state.creature_repository).await?;

    Ok(Json(SuccessResponse { success: true }))
}

/// POST /party/{id}/move
#[instrument(skip(state))]
async fn withdraw_creature(
    State(state): State<AppState>,
    Path(creature_id): Path<CreatureId>,
) -> Result<Json<MoveResponse>, ApiError> {
    let command = commands::WithdrawCreature {
        correlation_id: Uuid::new_v4(),
        creature_id,
    };

    info!(correlation_id = %command.correlation_id, "handling withdraw_creature command");

    let result =
        command_handlers::handle_withdraw_creature(&command, &*state.creature_repository).await?;

    Ok(Json(MoveResponse {
        success: true,
        pokemon: result.creature,
        roster: result.roster,
    }))
}

/// POST /party/optimize
#[instrument(skip(state))]
async fn optimize_party(State(state): State<AppState>) -> Result<Json<OptimizeResponse>, ApiError> {
    let command = commands::OptimizeParty {
        correlation_id: Uuid::new_v4(),
    };

    info!(correlation_id = %command.correlation_id, "handling optimize_party command");

    let roster =
        command_handlers::handle_optimize_party(&command, &*state.creature_repository).await?;

    Ok(Json(OptimizeResponse {
        success: true,
        roster,
    }))
}

/// Returns the router for the party.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/party", get(list_party).post(place_creature))
        .route("/party/optimize", post(optimize_party))
        .route("/party/{id}", delete(release_creature))
        .route("/party/{id}/move", post(withdraw_creature))
}
