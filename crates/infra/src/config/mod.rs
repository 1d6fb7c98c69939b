//! Configuration loading

pub mod loader;

pub use loader::{find_config_in, load, load_from_env, load_from_file, locate_config_file};
