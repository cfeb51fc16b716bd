//! Server configuration read from the environment.

use std::net::SocketAddr;

use pokeparty_fetcher::client::DEFAULT_BASE_URL;

use crate::error::AppError;

/// Runtime configuration for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// PostgreSQL connection URL (`DATABASE_URL`).
    pub database_url: String,
    /// Pool size (`DATABASE_MAX_CONNECTIONS`, default 10).
    pub database_max_connections: u32,
    /// Bind host (`HOST`, default `0.0.0.0`).
    pub host: String,
    /// Bind port (`PORT`, default 4000).
    pub port: u16,
    /// PokeAPI base URL (`POKEAPI_BASE_URL`).
    pub pokeapi_base_url: String,
    /// OTLP collector endpoint (`OTEL_EXPORTER_OTLP_ENDPOINT`); export is off when unset.
    pub otlp_endpoint: Option<String>,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `DATABASE_URL` is missing or a numeric
    /// variable does not parse.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which returns the value of a
    /// variable if set.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL").ok_or_else(|| {
            AppError::Config("DATABASE_URL environment variable must be set".to_owned())
        })?;
        let database_max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .map_or(Ok(10), |raw| raw.parse::<u32>())
            .map_err(|e| {
                AppError::Config(format!("DATABASE_MAX_CONNECTIONS must be a valid u32: {e}"))
            })?;
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_owned());
        let port = lookup("PORT")
            .map_or(Ok(4000), |raw| raw.parse::<u16>())
            .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;
        let pokeapi_base_url =
            lookup("POKEAPI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let otlp_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|v| !v.is_empty());

        Ok(Self {
            database_url,
            database_max_connections,
            host,
            port,
            pokeapi_base_url,
            otlp_endpoint,
        })
    }

    /// The address to bind the listener to.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `HOST:PORT` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}
