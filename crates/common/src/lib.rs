//! Shared infrastructure primitives for the Mergington crates.
//!
//! Currently this is the SQLite storage layer: an r2d2 connection pool with
//! per-connection pragmas, a pooled connection wrapper, storage errors and
//! lock-free pool metrics. Schema and queries live in `mergington-infra`;
//! nothing here knows about activities.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod storage;

pub use storage::{StorageError, StorageResult};
