use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Failed to open record source: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed record: {0}")]
    Decode(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
