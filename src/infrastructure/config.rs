//! Application configuration management.
//!
//! Configuration is loaded once at startup from environment variables (and a
//! `.env` file when present). Every value is validated before use.
//!
//! # Example
//!
//! ```rust,ignore
//! use subscription_aggregator::infrastructure::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("Listening on {}:{}", config.app_host, config.app_port);
//! ```

use std::env;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Backing store selected by `STORAGE_MODE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageMode {
    #[default]
    Postgres,
    InMemory,
}

impl FromStr for StorageMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "in_memory" | "inmemory" | "memory" => Ok(Self::InMemory),
            other => Err(format!(
                "unknown storage mode '{other}', expected 'postgres' or 'in_memory'"
            )),
        }
    }
}

impl fmt::Display for StorageMode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Postgres => write!(formatter, "postgres"),
            Self::InMemory => write!(formatter, "in_memory"),
        }
    }
}

/// Application configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage_mode: StorageMode,
    /// `None` only in [`StorageMode::InMemory`].
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub app_host: String,
    pub app_port: u16,
    /// Insert demo subscriptions when the store starts out empty.
    pub seed_demo_data: bool,
}

// Passwords live in the database URL.
impl fmt::Debug for AppConfig {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AppConfig")
            .field("storage_mode", &self.storage_mode)
            .field(
                "database_url",
                &self.database_url.as_ref().map(|_| "<redacted>"),
            )
            .field("database_max_connections", &self.database_max_connections)
            .field("app_host", &self.app_host)
            .field("app_port", &self.app_port)
            .field("seed_demo_data", &self.seed_demo_data)
            .finish()
    }
}

impl AppConfig {
    /// In-memory storage with seeding off and the documented host, port and
    /// pool defaults. Used by tests and embedders that bring their own store;
    /// the process itself is configured through [`AppConfig::from_env`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            storage_mode: StorageMode::InMemory,
            database_url: None,
            database_max_connections: 10,
            app_host: "0.0.0.0".to_string(),
            app_port: 3000,
            seed_demo_data: false,
        }
    }

    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `STORAGE_MODE`: `postgres` or `in_memory` (default: `postgres`)
    /// - `DATABASE_URL`: connection string; when absent it is assembled from
    ///   `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD` and `DB_NAME`
    /// - `DATABASE_MAX_CONNECTIONS`: pool size (default: 10)
    /// - `APP_HOST`: bind host (default: `0.0.0.0`)
    /// - `PORT`: bind port (default: 3000)
    /// - `SEED_DEMO_DATA`: `true` or `false` (default: `true`)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if PostgreSQL mode lacks database
    /// settings, and `ConfigError::InvalidValue` if a variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let storage_mode = parse_optional(&lookup, "STORAGE_MODE", StorageMode::Postgres)?;
        let database_url = match storage_mode {
            StorageMode::Postgres => Some(resolve_database_url(&lookup)?),
            StorageMode::InMemory => lookup("DATABASE_URL").filter(|url| !url.is_empty()),
        };

        Ok(Self {
            storage_mode,
            database_url,
            database_max_connections: parse_optional(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?,
            app_host: lookup("APP_HOST")
                .filter(|host| !host.is_empty())
                .unwrap_or_else(|| "0.0.0.0".to_string()),
            app_port: parse_optional(&lookup, "PORT", 3000)?,
            seed_demo_data: parse_optional(&lookup, "SEED_DEMO_DATA", true)?,
        })
    }

    /// `host:port` the server binds to.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }
}

fn resolve_database_url<F>(lookup: &F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("DATABASE_URL").filter(|url| !url.is_empty()) {
        return Ok(url);
    }

    let required = |key: &str| lookup(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()));
    let host = required("DB_HOST")?;
    let port: u16 = parse_required(lookup, "DB_PORT")?;
    let user = required("DB_USER")?;
    let password = required("DB_PASSWORD")?;
    let name = required("DB_NAME")?;

    Ok(format!(
        "postgres://{user}:{password}@{host}:{port}/{name}?sslmode=disable"
    ))
}

fn parse_required<F, T>(lookup: &F, key: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let value = lookup(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))?;
    parse_value(key, &value)
}

fn parse_optional<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .map_or(Ok(default), |value| parse_value(key, &value))
}

fn parse_value<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|error: T::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            message: error.to_string(),
        })
}
