//! Error handling for the replenishment engine
//!
//! Nothing here is fatal: every failure is a typed value returned to the
//! caller, since the engine is a pure computation embedded in an always-on
//! service. The surrounding orchestration owns user-visible messaging and
//! retry decisions.

use thiserror::Error;

/// Engine error types
#[derive(Error, Debug)]
pub enum EngineError {
    /// Input failed the fail-fast boundary checks (e.g. negative quantity)
    #[error("Validation error on {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Inputs changed between computation and materialization
    #[error("Conflict on {resource}: {message}")]
    Conflict { resource: String, message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The order-persistence collaborator rejected or failed the write
    #[error("Order write failed: {0}")]
    OrderWrite(String),

    #[error("Internal engine error")]
    Internal(#[from] anyhow::Error),
}

impl EngineError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
