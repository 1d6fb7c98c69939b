//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Mergington
///
/// The first four variants are business-rule rejections raised by the signup
/// service; the rest come from storage, configuration or the runtime.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum MergingtonError {
    #[error("Activity not found: {activity}")]
    NotFound { activity: String },

    #[error("{email} is already signed up for {activity}")]
    AlreadyRegistered { activity: String, email: String },

    #[error("{activity} is full ({max_participants} participants)")]
    CapacityExceeded { activity: String, max_participants: u32 },

    #[error("{email} is not signed up for {activity}")]
    NotRegistered { activity: String, email: String },

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl MergingtonError {
    /// Whether this error is a signup/unregister rule rejection rather than
    /// an infrastructure failure.
    pub fn is_rule_violation(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::AlreadyRegistered { .. }
                | Self::CapacityExceeded { .. }
                | Self::NotRegistered { .. }
        )
    }
}

/// Result type alias for Mergington operations
pub type Result<T> = std::result::Result<T, MergingtonError>;
