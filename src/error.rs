//! Error taxonomy shared by handlers, dispatchers and the repository.

use thiserror::Error;

use crate::repository::RepositoryError;

/// Every failure a command or query can produce.
///
/// Handlers return these directly; dispatchers pass them through untouched
/// and the boundary adapter maps them with [`ClazzError::status_code`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClazzError {
    /// Malformed or missing input, detected before any state change.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A uniqueness invariant would be violated.
    #[error("{entity} with {value} already exists")]
    DuplicateEntity { entity: &'static str, value: String },

    /// The referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// No handler registered for a request type. A wiring defect, never
    /// caused by caller input.
    #[error("no {kind} handler registered for {request_type}")]
    HandlerNotFound {
        kind: &'static str,
        request_type: &'static str,
    },

    /// A second handler was registered for a request type that already has one.
    #[error("{kind} handler for {request_type} registered twice")]
    HandlerConflict {
        kind: &'static str,
        request_type: &'static str,
    },

    /// The id counter has issued its last value.
    #[error("{entity} id space exhausted")]
    IdsExhausted { entity: &'static str },

    /// The backing store failed.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl ClazzError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ClazzError::InvalidArgument(message.into())
    }

    pub fn duplicate(entity: &'static str, value: impl Into<String>) -> Self {
        ClazzError::DuplicateEntity {
            entity,
            value: value.into(),
        }
    }

    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        ClazzError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            ClazzError::InvalidArgument(_) => 400,
            ClazzError::DuplicateEntity { .. } => 409,
            ClazzError::NotFound { .. } => 404,
            ClazzError::HandlerNotFound { .. } => 500,
            ClazzError::HandlerConflict { .. } => 500,
            ClazzError::IdsExhausted { .. } => 500,
            ClazzError::Repository(_) => 500,
        }
    }

    /// Whether resubmitting corrected input can succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ClazzError::InvalidArgument(_)
                | ClazzError::DuplicateEntity { .. }
                | ClazzError::NotFound { .. }
        )
    }
}
