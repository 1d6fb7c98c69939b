//! Logging and health helpers shared by the routes

pub mod health;
pub mod logging;
