//! Domain types shared by the search server and the search client.

pub mod types;
pub mod user;
