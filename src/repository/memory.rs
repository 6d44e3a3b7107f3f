//! Record source backed by an in-memory snapshot.

use std::sync::Arc;

use crate::domain::user::User;
use crate::repository::errors::RepositoryResult;
use crate::repository::{RecordCursor, RecordSource};

/// Immutable list of records shared by every cursor opened on it.
#[derive(Clone, Debug, Default)]
pub struct InMemorySource {
    users: Arc<[User]>,
}

impl InMemorySource {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: users.into(),
        }
    }
}

struct MemoryCursor {
    users: Arc<[User]>,
    position: usize,
}

impl RecordCursor for MemoryCursor {
    fn next_record(&mut self) -> RepositoryResult<Option<User>> {
        let user = self.users.get(self.position).cloned();
        if user.is_some() {
            self.position += 1;
        }
        Ok(user)
    }
}

impl RecordSource for InMemorySource {
    fn open(&self) -> RepositoryResult<Box<dyn RecordCursor>> {
        Ok(Box::new(MemoryCursor {
            users: Arc::clone(&self.users),
            position: 0,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursors_do_not_share_position() {
        let source = InMemorySource::new(vec![
            User::from_parts(1, "A", "A", 1, String::new(), String::new()),
            User::from_parts(2, "B", "B", 2, String::new(), String::new()),
        ]);

        let mut first = source.open().unwrap();
        assert_eq!(first.next_record().unwrap().map(|u| u.id), Some(1));

        let mut second = source.open().unwrap();
        assert_eq!(second.next_record().unwrap().map(|u| u.id), Some(1));
        assert_eq!(first.next_record().unwrap().map(|u| u.id), Some(2));
        assert!(first.next_record().unwrap().is_none());
        assert!(first.next_record().unwrap().is_none());
    }
}
