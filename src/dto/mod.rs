//! Request and response shapes exchanged over the search endpoint.

pub mod search;
