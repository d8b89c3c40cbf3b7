//! Environment configuration

use anyhow::Result;
use std::str::FromStr;
use thiserror::Error;

/// Which persistence backend serves the store interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// In-memory document store (data lost on shutdown)
    Memory,
    /// Embedded SQLite database
    Sqlite,
}

#[derive(Debug, Error)]
#[error("unknown store backend '{0}', expected 'memory' or 'sqlite'")]
pub struct ParseBackendError(String);

impl FromStr for StoreBackend {
    type Err = ParseBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "sqlite" => Ok(StoreBackend::Sqlite),
            other => Err(ParseBackendError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub backend: StoreBackend,
    pub database_path: String,
    pub static_dir: String,
}

/// Load configuration from environment variables, with fixed local defaults.
///
/// An unrecognized `STORE_BACKEND` value is a startup error; the process
/// must not begin serving against a backend it cannot name.
pub fn load_config() -> Result<Config> {
    let bind_address =
        std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:5000".to_string());

    let backend = match std::env::var("STORE_BACKEND") {
        Ok(value) => value.parse()?,
        Err(_) => StoreBackend::Sqlite,
    };

    let database_path =
        std::env::var("DATABASE_PATH").unwrap_or_else(|_| "data/relief.db".to_string());

    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

    Ok(Config {
        bind_address,
        backend,
        database_path,
        static_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_parses_known_names() {
        assert_eq!("memory".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
        assert_eq!("sqlite".parse::<StoreBackend>().unwrap(), StoreBackend::Sqlite);
        assert_eq!("SQLite".parse::<StoreBackend>().unwrap(), StoreBackend::Sqlite);
    }

    #[test]
    fn backend_rejects_unknown_names() {
        assert!("mongodb".parse::<StoreBackend>().is_err());
    }
}
