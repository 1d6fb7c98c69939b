//! # Mergington API
//!
//! HTTP application layer - routes and main entry point.
//!
//! This crate contains:
//! - axum routes for listing activities, signing up and unregistering
//! - Application context (dependency injection)
//! - Logging setup and the `mergington` binary
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires the SQLite store into the signup service
//! - Maps domain errors onto HTTP status codes

pub mod context;
pub mod routes;
pub mod utils;

pub use context::AppContext;
pub use routes::router;
