use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Result type returned by service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors returned by the service layer to the HTTP handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The requested record does not exist.
    #[error("not found")]
    NotFound,
    /// The request body failed validation before reaching storage.
    #[error("invalid payload: {0}")]
    Form(String),
    /// Storage rejected or failed the operation.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}
