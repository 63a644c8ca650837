use sea_orm::DbErr;
use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures surfaced by the services
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The addressed row does not exist, or is not owned by the caller
    #[error("{0}")]
    NotFound(String),
    /// Constraint violations and driver failures, passed through unchanged
    #[error(transparent)]
    Db(#[from] DbErr),
}

impl ServiceError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}
