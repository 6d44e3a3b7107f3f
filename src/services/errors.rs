use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Terminal failures of a single search.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unknown order field: {0}")]
    BadOrderField(String),

    #[error("record source failure: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
