//! Liveness endpoint.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Liveness response.
#[derive(Serialize)]
pub struct PingResponse {
    /// Always `"pong"`.
    pub message: &'static str,
}

/// GET /ping
async fn ping() -> Json<PingResponse> {
    Json(PingResponse { message: "pong" })
}

/// Returns the liveness router.
pub fn router() -> Router<AppState> {
    Router::new().route("/ping", get(ping))
}
