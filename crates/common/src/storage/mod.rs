//! Storage primitives for SQLite-backed repositories
//!
//! This module provides generic storage infrastructure: the pooled SQLite
//! backend, storage errors and pool health/metrics types.

pub mod error;
pub mod metrics;
pub mod sqlite;
pub mod types;

// Re-export commonly used types
pub use error::{StorageError, StorageResult};
pub use metrics::StorageMetrics;
pub use sqlite::{apply_connection_pragmas, SqliteConnection, SqlitePool, SqlitePoolConfig};
pub use types::{HealthStatus, PoolMetrics};
