//! Domain error types.

use thiserror::Error;

use crate::creature::CreatureId;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No creature with this id exists in the container the operation targets.
    #[error("creature not found: {0}")]
    NotFound(CreatureId),

    /// The party already holds its maximum number of members.
    #[error("party is full (max {capacity})")]
    CapacityExceeded {
        /// The party capacity that was reached.
        capacity: usize,
    },

    /// A required input was missing or unusable.
    #[error("validation error: {0}")]
    Validation(String),

    /// The external creature-data source failed or returned unusable data.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
