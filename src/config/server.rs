//! HTTP server settings read from the environment.

use crate::config::{lookup_parsed, lookup_value};
use crate::error::ConfigError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// `HEROES_BIND_ADDR`
    pub bind_addr: String,
    /// `HEROES_EXPOSE_ALTER_EGO`: include `alter_ego` in the public view.
    pub expose_alter_ego: bool,
    /// `HEROES_BODY_LIMIT` in bytes.
    pub body_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            expose_alter_ego: false,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();
        let expose_alter_ego = match lookup_value(&lookup, "HEROES_EXPOSE_ALTER_EGO") {
            Some(v) => parse_flag(&v).ok_or_else(|| ConfigError::Invalid {
                var: "HEROES_EXPOSE_ALTER_EGO",
                reason: format!("expected true or false, got '{}'", v),
            })?,
            None => defaults.expose_alter_ego,
        };
        Ok(ServerConfig {
            bind_addr: lookup_value(&lookup, "HEROES_BIND_ADDR").unwrap_or(defaults.bind_addr),
            expose_alter_ego,
            body_limit: lookup_parsed(&lookup, "HEROES_BODY_LIMIT")?.unwrap_or(defaults.body_limit),
        })
    }
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert!(!config.expose_alter_ego);
    }

    #[test]
    fn flag_values() {
        let config = ServerConfig::from_lookup(|k| {
            (k == "HEROES_EXPOSE_ALTER_EGO").then(|| "Yes".to_string())
        })
        .unwrap();
        assert!(config.expose_alter_ego);

        let err = ServerConfig::from_lookup(|k| {
            (k == "HEROES_EXPOSE_ALTER_EGO").then(|| "maybe".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "HEROES_EXPOSE_ALTER_EGO", .. }));
    }
}
