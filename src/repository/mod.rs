use crate::{domain::user::User, repository::errors::RepositoryResult};

pub mod errors;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;
#[cfg(feature = "server")]
pub mod xml;

/// Sequential read handle over a record store.
pub trait RecordCursor: Send {
    /// Returns the next record, `None` at end of data.
    fn next_record(&mut self) -> RepositoryResult<Option<User>>;
}

/// Read-only record store scanned from the beginning on every search.
pub trait RecordSource: Send + Sync {
    /// Opens a fresh cursor positioned before the first record.
    ///
    /// Each call must return an independent cursor; no read position is
    /// shared between callers.
    fn open(&self) -> RepositoryResult<Box<dyn RecordCursor>>;
}
