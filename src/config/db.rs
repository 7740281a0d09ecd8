//! Database connection settings read from the environment.

use crate::config::{lookup_parsed, lookup_value};
use crate::error::ConfigError;
use sqlx::postgres::PgConnectOptions;
use std::fmt;
use std::str::FromStr;

/// Port used when `DB_PORT` is not set.
pub const DEFAULT_DB_PORT: u16 = 1433;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Which store backs the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DbDriver {
    Postgres,
    Memory,
}

impl FromStr for DbDriver {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(DbDriver::Postgres),
            "memory" => Ok(DbDriver::Memory),
            other => Err(ConfigError::UnsupportedDriver(other.to_string())),
        }
    }
}

/// Connection parameters: `DB_DRIVER`, `DB_USER`, `DB_PASSWORD`, `DB_SERVER`, `DB_PORT`, `DB_NAME`,
/// `DB_MAX_CONNECTIONS`. `DATABASE_URL` takes precedence over the individual parameters.
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub driver: DbDriver,
    pub url: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub server: Option<String>,
    pub port: u16,
    pub name: Option<String>,
    pub max_connections: u32,
}

impl DbConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let driver = match lookup_value(&lookup, "DB_DRIVER") {
            Some(d) => d.parse()?,
            None => DbDriver::Postgres,
        };
        let config = DbConfig {
            driver,
            url: lookup_value(&lookup, "DATABASE_URL"),
            user: lookup_value(&lookup, "DB_USER"),
            password: lookup_value(&lookup, "DB_PASSWORD"),
            server: lookup_value(&lookup, "DB_SERVER"),
            port: lookup_parsed(&lookup, "DB_PORT")?.unwrap_or(DEFAULT_DB_PORT),
            name: lookup_value(&lookup, "DB_NAME"),
            max_connections: lookup_parsed(&lookup, "DB_MAX_CONNECTIONS")?
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
        };
        if config.max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: "DB_MAX_CONNECTIONS",
                reason: "must be at least 1".into(),
            });
        }
        if config.driver == DbDriver::Postgres {
            config.connect_options()?;
        }
        Ok(config)
    }

    /// In-memory configuration, mostly for tests and local runs.
    pub fn memory() -> Self {
        DbConfig {
            driver: DbDriver::Memory,
            url: None,
            user: None,
            password: None,
            server: None,
            port: DEFAULT_DB_PORT,
            name: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// PostgreSQL connect options. Built field by field so credentials need no escaping.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url).map_err(|e| ConfigError::Invalid {
                var: "DATABASE_URL",
                reason: e.to_string(),
            });
        }
        let user = self.user.as_deref().ok_or(ConfigError::Missing("DB_USER"))?;
        let server = self.server.as_deref().ok_or(ConfigError::Missing("DB_SERVER"))?;
        let name = self.name.as_deref().ok_or(ConfigError::Missing("DB_NAME"))?;
        let mut opts = PgConnectOptions::new()
            .host(server)
            .port(self.port)
            .username(user)
            .database(name);
        if let Some(password) = &self.password {
            opts = opts.password(password);
        }
        Ok(opts)
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("driver", &self.driver)
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("server", &self.server)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}
