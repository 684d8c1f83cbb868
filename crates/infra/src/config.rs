//! Configuration loading from the process environment.
//!
//! Callers are expected to have loaded any `.env` file beforehand; this module
//! only reads variables. The `from_lookup` constructors take the lookup as a
//! closure so tests can feed a map instead of mutating the real environment.

use sqlx::postgres::{PgConnectOptions, PgSslMode};
use thiserror::Error;

pub const DB_HOST: &str = "DB_HOST";
pub const DB_PORT: &str = "DB_PORT";
pub const DB_USER: &str = "DB_USER";
pub const DB_PASSWORD: &str = "DB_PASSWORD";
pub const DB_NAME: &str = "DB_NAME";
pub const DB_SSLMODE: &str = "DB_SSLMODE";
pub const PORT: &str = "PORT";

pub const DEFAULT_PORT: u16 = 8081;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// One or more required variables are unset or empty.
    #[error("database environment variables are not properly set (missing: {})", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Connection parameters for the product store.
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: String,
    pub user: String,
    pub password: String,
    pub dbname: String,
    pub sslmode: String,
}

impl core::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("dbname", &self.dbname)
            .field("sslmode", &self.sslmode)
            .finish()
    }
}

impl DbConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Every variable is required; all missing names are reported together.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut missing = Vec::new();
        let mut take = |var: &'static str| match lookup(var) {
            Some(v) if !v.is_empty() => v,
            _ => {
                missing.push(var);
                String::new()
            }
        };

        let config = Self {
            host: take(DB_HOST),
            port: take(DB_PORT),
            user: take(DB_USER),
            password: take(DB_PASSWORD),
            dbname: take(DB_NAME),
            sslmode: take(DB_SSLMODE),
        };

        if missing.is_empty() {
            Ok(config)
        } else {
            Err(ConfigError::Missing(missing))
        }
    }

    /// libpq key/value connection string.
    pub fn dsn(&self) -> String {
        format!(
            "host={} user={} password={} dbname={} port={} sslmode={}",
            self.host, self.user, self.password, self.dbname, self.port, self.sslmode
        )
    }

    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        let port = self.port.parse::<u16>().map_err(|e| ConfigError::Invalid {
            var: DB_PORT,
            reason: e.to_string(),
        })?;
        let ssl_mode = self.sslmode.parse::<PgSslMode>().map_err(|e| ConfigError::Invalid {
            var: DB_SSLMODE,
            reason: e.to_string(),
        })?;

        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.dbname)
            .ssl_mode(ssl_mode))
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        match lookup(PORT) {
            Some(raw) if !raw.is_empty() => {
                let port = raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                    var: PORT,
                    reason: e.to_string(),
                })?;
                Ok(Self { port })
            }
            _ => Ok(Self::default()),
        }
    }
}
