//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `MERGINGTON_DB_PATH` is unset, falls back to loading from file
//! 3. Looks up a config file by name (see File Locations)
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `MERGINGTON_DB_PATH`: Database file path (required)
//! - `MERGINGTON_DB_POOL_SIZE`: Connection pool size
//! - `MERGINGTON_HOST`: Listen address
//! - `MERGINGTON_PORT`: Listen port
//! - `MERGINGTON_LOG_FILTER`: Default `EnvFilter` directive
//! - `MERGINGTON_LOG_JSON`: Emit JSON logs (true/false)
//! - `MERGINGTON_SEED`: Seed the default catalog on startup (true/false)
//!
//! ## File Locations
//! Without an explicit path, the first of `mergington.toml`,
//! `mergington.json`, `config.toml`, `config.json` found in the working
//! directory is used, then the same names next to the executable.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use mergington_domain::{
    Config, DatabaseConfig, LoggingConfig, MergingtonError, Result, SeedConfig, ServerConfig,
};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the database path
/// is not set there, falls back to loading from a config file.
///
/// # Errors
/// Returns `MergingtonError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - A value cannot be parsed
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// Only `MERGINGTON_DB_PATH` is required; every other variable falls back to
/// the value in `Config::default()`.
///
/// # Errors
/// Returns `MergingtonError::Config` if the database path is missing or a
/// numeric variable does not parse.
pub fn load_from_env() -> Result<Config> {
    let database_defaults = DatabaseConfig::default();
    let server_defaults = ServerConfig::default();
    let logging_defaults = LoggingConfig::default();

    let path = env_var("MERGINGTON_DB_PATH")?;
    let pool_size = env_parse("MERGINGTON_DB_POOL_SIZE", "pool size")?
        .unwrap_or(database_defaults.pool_size);

    let host = std::env::var("MERGINGTON_HOST").unwrap_or(server_defaults.host);
    let port = env_parse("MERGINGTON_PORT", "port")?.unwrap_or(server_defaults.port);

    let filter = std::env::var("MERGINGTON_LOG_FILTER").unwrap_or(logging_defaults.filter);
    let json = env_bool("MERGINGTON_LOG_JSON", logging_defaults.json);

    let seed = env_bool("MERGINGTON_SEED", SeedConfig::default().enabled);

    Ok(Config {
        database: DatabaseConfig { path, pool_size },
        server: ServerConfig { host, port },
        logging: LoggingConfig { filter, json },
        seed: SeedConfig { enabled: seed },
    })
}

/// Config file names, in lookup order.
const CONFIG_FILE_NAMES: [&str; 4] =
    ["mergington.toml", "mergington.json", "config.toml", "config.json"];

/// Load configuration from `path`, or from the first file
/// [`locate_config_file`] finds when `path` is `None`.
///
/// # Errors
/// `MergingtonError::Config` when no file is found, it cannot be read, or
/// its contents do not describe a `Config`.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(path) => path,
        None => locate_config_file().ok_or_else(|| {
            MergingtonError::Config(format!(
                "no config file ({}) in the working directory or next to the executable",
                CONFIG_FILE_NAMES.join(", ")
            ))
        })?,
    };

    let contents = std::fs::read_to_string(&config_path).map_err(|e| {
        MergingtonError::Config(format!("cannot read {}: {e}", config_path.display()))
    })?;
    tracing::info!(path = %config_path.display(), "configuration loaded from file");

    parse_config(&contents, &config_path)
}

/// Parse `contents` as TOML or JSON according to the extension of `path`.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(contents)
            .map_err(|e| MergingtonError::Config(format!("{}: {e}", path.display()))),
        Some("json") => serde_json::from_str(contents)
            .map_err(|e| MergingtonError::Config(format!("{}: {e}", path.display()))),
        _ => Err(MergingtonError::Config(format!(
            "{}: config files must end in .toml or .json",
            path.display()
        ))),
    }
}

/// The config file to use when none is given explicitly.
pub fn locate_config_file() -> Option<PathBuf> {
    let exe_dir =
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf));

    std::env::current_dir().ok().into_iter().chain(exe_dir).find_map(|dir| find_config_in(&dir))
}

/// First of [`CONFIG_FILE_NAMES`] that exists in `dir`.
pub fn find_config_in(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES.iter().map(|name| dir.join(name)).find(|path| path.is_file())
}

/// Get required environment variable
///
/// # Errors
/// Returns `MergingtonError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        MergingtonError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Parse an optional environment variable, `Ok(None)` when it is unset.
fn env_parse<T>(key: &str, what: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| MergingtonError::Config(format!("Invalid {what}: {e}"))),
        Err(_) => Ok(None),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive).
/// Returns `default` if the variable is not set.
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
