//! Pokeparty API: error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pokeparty_core::error::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Database connection or pool error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failed.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Tracing exporter could not be built.
    #[error("telemetry error: {0}")]
    Telemetry(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer wrapper around `DomainError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self.0 {
            DomainError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found", self.0.to_string()),
            DomainError::CapacityExceeded { .. } => {
                (StatusCode::BAD_REQUEST, "party_full", self.0.to_string())
            }
            DomainError::Validation(_) => {
                (StatusCode::BAD_REQUEST, "validation_error", self.0.to_string())
            }
            // Upstream and storage detail stays in the logs.
            DomainError::Upstream(_) => {
                tracing::error!(error = %self.0, "upstream request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "upstream_error",
                    "failed to retrieve pokemon".to_owned(),
                )
            }
            DomainError::Infrastructure(_) => {
                tracing::error!(error = %self.0, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "infrastructure_error",
                    "internal server error".to_owned(),
                )
            }
        };

        let body = ErrorBody {
            error: error_code,
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn status_of(err: DomainError) -> StatusCode {
        let response = ApiError(err).into_response();
        response.status()
    }

    async fn body_of(err: DomainError) -> serde_json::Value {
        let response = ApiError(err).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(status_of(DomainError::NotFound(7)), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_capacity_exceeded_maps_to_400() {
        assert_eq!(
            status_of(DomainError::CapacityExceeded { capacity: 6 }),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_validation_maps_to_400() {
        assert_eq!(
            status_of(DomainError::Validation("bad input".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_upstream_maps_to_500() {
        assert_eq!(
            status_of(DomainError::Upstream("404 Not Found".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_infrastructure_maps_to_500() {
        assert_eq!(
            status_of(DomainError::Infrastructure("db down".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_server_errors_do_not_leak_detail() {
        let json = body_of(DomainError::Infrastructure("password=hunter2".into())).await;
        assert_eq!(json["error"], "infrastructure_error");
        assert!(!json["message"].as_str().unwrap().contains("hunter2"));

        let json = body_of(DomainError::Upstream("dns failure for pokeapi.co".into())).await;
        assert_eq!(json["error"], "upstream_error");
        assert!(!json["message"].as_str().unwrap().contains("pokeapi"));
    }

    #[tokio::test]
    async fn test_client_errors_carry_message() {
        let json = body_of(DomainError::CapacityExceeded { capacity: 6 }).await;

        assert_eq!(json["error"], "party_full");
        assert_eq!(json["message"], "party is full (max 6)");
    }
}
