//! Configuration management for the contact manager.
//!
//! Settings come from environment variables, with an optional `.env` file
//! loaded first. Every setting has a default so the application starts with
//! no configuration at all.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default SQLite database file.
pub const DEFAULT_DATABASE: &str = "contacts.db";

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Configuration for the contact manager.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the SQLite database file (default: contacts.db)
    pub database_path: PathBuf,

    /// Address the HTTP server listens on (default: 127.0.0.1:5000)
    pub bind_addr: SocketAddr,

    /// Log level used when RUST_LOG is not set (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_DATABASE`: SQLite database path (default: contacts.db)
    /// - `CONTACTS_BIND_ADDR`: listen address (default: 127.0.0.1:5000)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let database_path =
            env::var("CONTACTS_DATABASE").unwrap_or_else(|_| DEFAULT_DATABASE.to_string());
        if database_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_DATABASE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let bind_addr = Self::parse_env_addr("CONTACTS_BIND_ADDR", DEFAULT_BIND_ADDR)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            database_path: PathBuf::from(database_path),
            bind_addr,
            log_level,
        })
    }

    /// Parse an environment variable as a socket address with a default value.
    fn parse_env_addr(var_name: &str, default: &str) -> ConfigResult<SocketAddr> {
        let raw = env::var(var_name).unwrap_or_else(|_| default.to_string());
        raw.parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be host:port, got: {}", raw),
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_path: PathBuf::from(DEFAULT_DATABASE),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            log_level: "info".to_string(),
        }
    }
}
