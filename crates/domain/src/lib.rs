//! # Mergington Domain
//!
//! Business domain types for the activity signup service.
//!
//! This crate contains:
//! - Activity and participant types
//! - The error taxonomy and `Result` alias
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other Mergington crates
//! - Pure data types, no I/O

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
