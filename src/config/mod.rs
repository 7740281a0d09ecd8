//! Environment configuration for the database and the HTTP server.

pub mod db;
pub mod server;

pub use db::{DbConfig, DbDriver, DEFAULT_DB_PORT};
pub use server::ServerConfig;

use crate::error::ConfigError;
use std::fmt::Display;
use std::str::FromStr;

fn lookup_value<F>(lookup: &F, var: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var).filter(|v| !v.trim().is_empty())
}

fn lookup_parsed<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    lookup_value(lookup, var)
        .map(|v| {
            v.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
                var,
                reason: e.to_string(),
            })
        })
        .transpose()
}
