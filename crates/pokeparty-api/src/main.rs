//! Pokeparty API server entry point.

use std::error::Error;
use std::sync::{Arc, Mutex};

use sqlx::postgres::PgPoolOptions;

use pokeparty_api::config::AppConfig;
use pokeparty_api::error::AppError;
use pokeparty_api::state::AppState;
use pokeparty_api::{app, telemetry};
use pokeparty_core::rng::{DeterministicRng, SystemRng};
use pokeparty_fetcher::client::PokeApiClient;
use pokeparty_store::pg_creature_repository::PgCreatureRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env()?;
    let tracer_provider = telemetry::init(config.otlp_endpoint.as_deref())?;

    tracing::info!("Starting Pokeparty API server");

    // Create database connection pool and bring the schema up to date.
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .map_err(AppError::from)?;
    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .map_err(AppError::from)?;

    let pokedex = PokeApiClient::new(&config.pokeapi_base_url)
        .map_err(|e| AppError::Config(format!("POKEAPI_BASE_URL is invalid: {e}")))?;
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> =
        Arc::new(Mutex::new(SystemRng::from_os()));

    let app_state = AppState::new(
        Arc::new(PgCreatureRepository::new(pool)),
        Arc::new(pokedex),
        rng,
    );

    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(AppError::from)?;

    axum::serve(listener, app(app_state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::from)?;

    if let Some(provider) = tracer_provider {
        provider
            .shutdown()
            .map_err(|e| AppError::Telemetry(e.to_string()))?;
    }

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
