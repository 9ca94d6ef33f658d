//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all domain entities.

use thiserror::Error;

use super::task::TaskId;
use super::validation::{format_validation_errors, ValidationError};

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors. None of them are fatal; the UI shows them and moves on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{}", format_validation_errors(.0))]
    Validation(Vec<ValidationError>),

    /// Mutation attempted on a task sourced from the remote endpoint
    #[error("Cannot modify API task")]
    ReadOnly { id: TaskId },

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Storage error: {0}")]
    Storage(String),
}
