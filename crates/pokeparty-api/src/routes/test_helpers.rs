//! Shared helpers for route unit tests.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use pokeparty_core::pokedex::Pokedex;
use pokeparty_core::repository::CreatureRepository;
use pokeparty_core::rng::DeterministicRng;
use pokeparty_test_support::{MockRng, StubPokedex};
use serde_json::Value;
use tower::ServiceExt;

use crate::state::AppState;

pub(crate) fn app_state_with(repo: Arc<dyn CreatureRepository>) -> AppState {
    app_state_with_pokedex(repo, Arc::new(StubPokedex::new()))
}

pub(crate) fn app_state_with_pokedex(
    repo: Arc<dyn CreatureRepository>,
    pokedex: Arc<dyn Pokedex>,
) -> AppState {
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(MockRng));
    AppState::new(repo, pokedex, rng)
}

/// Sends a request with an optional JSON body and returns the status and
/// the decoded JSON body (`Value::Null` when the body is empty).
pub(crate) async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<&Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

pub(crate) fn ids(json: &Value) -> Vec<i64> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect()
}
