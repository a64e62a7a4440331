//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("Entity not found: {entity_type} '{key}'")]
    NotFoundByKey { entity_type: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Section disabled: {0}")]
    Disabled(&'static str),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Repository-level errors.
///
/// The persistence layer does not classify ORM failures beyond this; callers
/// decide how to surface them.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Stored data could not be decoded: {0}")]
    Decode(String),
}
