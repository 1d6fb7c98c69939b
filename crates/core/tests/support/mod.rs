//! Shared test helpers for `mergington-core` integration tests.

pub mod store;
