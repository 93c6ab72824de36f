use diesel::r2d2::PoolError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Result type returned by repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors surfaced by the storage layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No row matched the requested identifier.
    #[error("record not found")]
    NotFound,
    /// The database rejected the write (foreign key, check or not-null constraint).
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    /// Any other database failure.
    #[error("database error: {0}")]
    Database(DieselError),
    /// No connection could be checked out of the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),
}

impl From<DieselError> for RepositoryError {
    fn from(value: DieselError) -> Self {
        match value {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(
                kind @ (DatabaseErrorKind::ForeignKeyViolation
                | DatabaseErrorKind::UniqueViolation
                | DatabaseErrorKind::NotNullViolation
                | DatabaseErrorKind::CheckViolation),
                info,
            ) => RepositoryError::ConstraintViolation(format!("{kind:?}: {}", info.message())),
            other => RepositoryError::Database(other),
        }
    }
}
