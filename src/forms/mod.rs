//! Validation of raw request input into typed parameters.

pub mod search;
