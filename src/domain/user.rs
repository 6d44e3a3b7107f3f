use serde::{Deserialize, Serialize};

/// One record of the searchable store.
///
/// `name` is derived once when the raw record is decoded, so every query
/// matches and sorts against the same display value.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub about: String,
    pub gender: String,
}

impl User {
    /// Builds a record from its raw first/last name parts.
    #[must_use]
    pub fn from_parts(
        id: i32,
        first_name: &str,
        last_name: &str,
        age: i32,
        about: String,
        gender: String,
    ) -> Self {
        Self {
            id,
            name: format!("{first_name} {last_name}"),
            age,
            about,
            gender,
        }
    }

    /// Case-sensitive substring match against `name` and `about`.
    ///
    /// The empty query matches every record.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        self.name.contains(query) || self.about.contains(query)
    }
}
