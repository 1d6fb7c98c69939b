//! # Mergington Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The `ActivityStore` port (trait) implemented by infrastructure
//! - `SignupService`, which enforces the signup/unregister rules
//!
//! ## Architecture Principles
//! - Only depends on `mergington-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits

pub mod signup;

pub use signup::ports::ActivityStore;
pub use signup::SignupService;
