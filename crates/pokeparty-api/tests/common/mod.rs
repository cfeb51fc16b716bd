//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use pokeparty_core::creature::Creature;
use pokeparty_core::pokedex::Pokedex;
use pokeparty_core::repository::CreatureRepository;
use pokeparty_core::rng::DeterministicRng;
use pokeparty_store::pg_creature_repository::PgCreatureRepository;
use pokeparty_test_support::{InMemoryCreatureRepository, SequenceRng, StubPokedex};
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;

use pokeparty_api::app;
use pokeparty_api::state::AppState;

/// Build the full app over a real `PgCreatureRepository`.
pub fn build_pg_app(pool: PgPool) -> Router {
    build_app(
        Arc::new(PgCreatureRepository::new(pool)),
        Arc::new(StubPokedex::new()),
        SequenceRng::new(vec![]),
    )
}

/// Build the full app over an in-memory repository.
pub fn build_memory_app(repo: Arc<InMemoryCreatureRepository>) -> Router {
    build_app(repo, Arc::new(StubPokedex::new()), SequenceRng::new(vec![]))
}

/// Build the full app with every collaborator supplied by the caller.
pub fn build_app(
    repo: Arc<dyn CreatureRepository>,
    pokedex: Arc<dyn Pokedex>,
    rng: SequenceRng,
) -> Router {
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(rng));
    app(AppState::new(repo, pokedex, rng))
}

/// JSON payload for a creature whose six stats sum to `total`
/// (`total` must be a multiple of 6 for an exact split).
pub fn payload(id: i32, total: u32) -> Value {
    let base = total / 6;
    json!({
        "id": id,
        "name": format!("mon-{id}"),
        "sprite": format!("https://img.example/{id}.png"),
        "types": ["normal"],
        "stats": [
            { "name": "hp", "base": base },
            { "name": "attack", "base": base },
            { "name": "defense", "base": base },
            { "name": "special-attack", "base": base },
            { "name": "special-defense", "base": base },
            { "name": "speed", "base": base }
        ]
    })
}

/// Deserialize a response body into a creature record.
pub fn as_creature(json: &Value) -> Creature {
    serde_json::from_value(json.clone()).unwrap()
}

/// Ids of a JSON array of creature records, in order.
pub fn ids(json: &Value) -> Vec<i64> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect()
}

/// Send a request without a body and return the response.
pub async fn send_empty(app: Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    read(app, request).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    send_empty(app, "GET", uri).await
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    read(app, request).await
}

async fn read(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}
