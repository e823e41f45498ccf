//! Domain-level errors

use thiserror::Error;

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    Conflict(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// HTTP status the console expects for this error
    pub fn status(&self) -> u16 {
        match self {
            DomainError::NotFound(_) => 404,
            DomainError::InvalidInput(_) => 400,
            DomainError::Conflict(_) => 409,
            DomainError::Internal(_) => 500,
        }
    }
}
