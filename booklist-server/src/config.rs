//! Server configuration from `BOOKLIST_*` environment variables

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;
use thiserror::Error;

/// Bind address used when `BOOKLIST_ADDR` is unset
pub const DEFAULT_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 3000));

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid BOOKLIST_ADDR '{value}': {source}")]
    InvalidAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("Invalid BOOKLIST_CATALOG_TIMEOUT_SECS '{0}': expected a positive integer")]
    InvalidTimeout(String),
}

/// Allowed CORS origins for the JSON API
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CorsOrigins {
    /// `*`
    Any,

    /// Explicit comma-separated list
    List(Vec<String>),

    /// localhost on the dev ports
    #[default]
    LocalDev,
}

impl CorsOrigins {
    fn parse(value: &str) -> Self {
        if value.trim() == "*" {
            return Self::Any;
        }
        Self::List(
            value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Catalog API root, without `/volumes`
    pub catalog_url: String,
    /// Query run once at startup
    pub initial_query: String,
    pub cors_origins: CorsOrigins,
    pub catalog_timeout: Option<Duration>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR,
            catalog_url: booklist_core::GoogleBooksCatalog::DEFAULT_BASE_URL.to_string(),
            initial_query: booklist_core::DEFAULT_QUERY.to_string(),
            cors_origins: CorsOrigins::default(),
            catalog_timeout: None,
        }
    }
}

impl ServerConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("BOOKLIST_ADDR") {
            config.addr = value
                .parse()
                .map_err(|source| ConfigError::InvalidAddr { value, source })?;
        }
        if let Some(url) = lookup("BOOKLIST_CATALOG_URL") {
            config.catalog_url = url;
        }
        if let Some(query) = lookup("BOOKLIST_INITIAL_QUERY").filter(|q| !q.trim().is_empty()) {
            config.initial_query = query;
        }
        if let Some(origins) = lookup("BOOKLIST_CORS_ORIGINS") {
            config.cors_origins = CorsOrigins::parse(&origins);
        }
        if let Some(secs) = lookup("BOOKLIST_CATALOG_TIMEOUT_SECS") {
            let parsed = secs
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(secs.clone()))?;
            config.catalog_timeout = Some(Duration::from_secs(parsed));
        }

        Ok(config)
    }
}
