//! # Mergington Infrastructure
//!
//! Adapters behind the `mergington-core` ports.
//!
//! This crate contains:
//! - `SqliteActivityStore`, the pooled SQLite implementation of `ActivityStore`
//! - `DbManager`, which owns the pool and the schema
//! - The configuration loader (environment, JSON or TOML)
//! - Seeding of the default activity catalog
//! - Conversions from storage errors into `MergingtonError`

pub mod config;
pub mod database;
pub mod errors;
pub mod seed;

pub use database::{DbManager, SqliteActivityStore};
pub use errors::InfraError;
