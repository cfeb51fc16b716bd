//! Routes for the box.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get, routing::post};
use tracing::{info, instrument};
use uuid::Uuid;

use pokeparty_core::creature::{Creature, CreatureId};
use pokeparty_roster::application::{command_handlers, query_handlers};
use pokeparty_roster::domain::commands;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /box
#[instrument(skip(state))]
async fn list_box(State(state): State<AppState>) -> Result<Json<Vec<Creature>>, ApiError> {
    let boxed = query_handlers::list_box(&*state.creature_repository).await?;
    Ok(Json(boxed))
}

/// POST /box/{id}
#[instrument(skip(state))]
async fn deposit_creature(
    State(state): State<AppState>,
    Path(creature_id): Path<CreatureId>,
) -> Result<Json<Creature>, ApiError> {
    let command = commands::DepositCreature {
        correlation_id: Uuid::new_v4(),
        creature_id,
    };

    info!(correlation_id = %command.correlation_id, "handling deposit_creature command");

    let updated =
        command_handlers::handle_deposit_creature(&command, &*state.creature_repository).await?;

    Ok(Json(updated))
}

/// Returns the router for the box.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/box", get(list_box))
        .route("/box/{id}", post(deposit_creature))
}
