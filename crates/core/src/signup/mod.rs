//! Activity signup: store port and rule-enforcing service.

pub mod ports;
pub mod service;

pub use service::SignupService;
