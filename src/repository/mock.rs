//! Mock record sources for isolating the search engine in tests.

use mockall::mock;

use crate::domain::user::User;
use crate::repository::errors::RepositoryResult;
use crate::repository::{RecordCursor, RecordSource};

mock! {
    pub Source {}

    impl RecordSource for Source {
        fn open(&self) -> RepositoryResult<Box<dyn RecordCursor>>;
    }
}

mock! {
    pub Cursor {}

    impl RecordCursor for Cursor {
        fn next_record(&mut self) -> RepositoryResult<Option<User>>;
    }
}
