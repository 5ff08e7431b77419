// src/config.rs

use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
}

impl AppConfig {
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 20;
    pub const DEFAULT_MIN_CONNECTIONS: u32 = 2;

    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the
    /// server settings.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_env_files();

        let database_url = required("DATABASE_URL")?;
        let host = required("HOST")?;
        let port = parse_required::<u16>("PORT")?;
        let db_max_connections =
            parse_or("DB_MAX_CONNECTIONS", Self::DEFAULT_MAX_CONNECTIONS)?;
        let db_min_connections =
            parse_or("DB_MIN_CONNECTIONS", Self::DEFAULT_MIN_CONNECTIONS)?;

        if db_min_connections > db_max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                reason: "cannot exceed DB_MAX_CONNECTIONS".to_string(),
            });
        }

        Ok(Self {
            database_url,
            host,
            port,
            db_max_connections,
            db_min_connections,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn load_env_files() {
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

pub(crate) fn required(key: &'static str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key)),
    }
}

pub(crate) fn parse_required<T>(key: &'static str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    parse_value(key, &required(key)?)
}

pub(crate) fn parse_or<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => parse_value(key, &raw),
        _ => Ok(default),
    }
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })
}
