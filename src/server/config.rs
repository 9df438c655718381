//! Environment configuration for the server.

use std::{str::FromStr, time::Duration};

use crate::server::error::config::ConfigError;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_CATALOG_URL: &str = "https://pokeapi.co/api/v2";

/// Runtime configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub bind_address: String,
    pub catalog: CatalogConfig,
}

/// Settings for the external species catalog client.
#[derive(Clone, Debug)]
pub struct CatalogConfig {
    /// Base URL of the catalog API, without a trailing slash
    pub base_url: String,
    /// Attempts per species lookup before giving up
    pub max_attempts: u32,
    /// Backoff before the first retry, doubled for each subsequent retry
    pub initial_backoff: Duration,
    /// Timeout applied to each individual request
    pub request_timeout: Duration,
    /// Maximum number of lookups in flight when listing species
    pub concurrency: usize,
}

impl CatalogConfig {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    pub const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_secs(1);
    pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
    pub const DEFAULT_CONCURRENCY: usize = 4;

    /// Catalog settings with default retry, timeout and concurrency values.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            initial_backoff: Self::DEFAULT_INITIAL_BACKOFF,
            request_timeout: Self::DEFAULT_REQUEST_TIMEOUT,
            concurrency: Self::DEFAULT_CONCURRENCY,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let catalog_url =
            optional_var("CATALOG_URL")?.unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());
        let mut catalog = CatalogConfig::new(&catalog_url);

        if let Some(max_attempts) = parse_optional_var::<u32>("CATALOG_MAX_ATTEMPTS")? {
            if max_attempts == 0 {
                return Err(ConfigError::InvalidEnvValue {
                    var: "CATALOG_MAX_ATTEMPTS".to_string(),
                    reason: "must be at least 1".to_string(),
                });
            }
            catalog.max_attempts = max_attempts;
        }
        if let Some(backoff_ms) = parse_optional_var::<u64>("CATALOG_BACKOFF_MS")? {
            catalog.initial_backoff = Duration::from_millis(backoff_ms);
        }
        if let Some(timeout_ms) = parse_optional_var::<u64>("CATALOG_TIMEOUT_MS")? {
            catalog.request_timeout = Duration::from_millis(timeout_ms);
        }
        if let Some(concurrency) = parse_optional_var::<usize>("CATALOG_CONCURRENCY")? {
            catalog.concurrency = concurrency.max(1);
        }

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            valkey_url: required_var("VALKEY_URL")?,
            bind_address: optional_var("BIND_ADDRESS")?
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            catalog,
        })
    }
}

fn required_var(var: &str) -> Result<String, ConfigError> {
    optional_var(var)?.ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional_var(var: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(var) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "value is not valid unicode".to_string(),
        }),
    }
}

fn parse_optional_var<T>(var: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    optional_var(var)?
        .map(|value| parse_value(var, &value))
        .transpose()
}

fn parse_value<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        })
}
