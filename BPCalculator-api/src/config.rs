//! Server configuration loaded from the environment

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Default port the server listens on
pub const DEFAULT_PORT: u16 = 5000;

/// Errors raised while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// PORT was set but is not a valid port number
    #[error("Invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// HOST was set but is not a valid IP address
    #[error("Invalid HOST value '{value}': {source}")]
    InvalidHost {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Runtime configuration for the HTTP server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind to (default: all interfaces)
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Deployment environment reported by the health endpoint
    pub environment: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            environment: "development".to_string(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from `HOST`, `PORT` and `APP_ENV`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(value) => value
                .parse::<IpAddr>()
                .map_err(|source| ConfigError::InvalidHost { value, source })?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => defaults.port,
        };

        let environment = lookup("APP_ENV").unwrap_or(defaults.environment);

        Ok(Self { host, port, environment })
    }

    /// Socket address to bind the listener to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
