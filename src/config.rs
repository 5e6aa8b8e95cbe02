//! Server configuration
//!
//! Read from environment variables (and a `.env` file, if present):
//! - `WEBHOOK_HOST`: bind address (default `0.0.0.0`)
//! - `WEBHOOK_PORT`: listening port (default `8080`)
//! - `WEBHOOK_BUFFER_CAPACITY`: number of webhooks retained (default `1000`)

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::num::NonZeroUsize;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CAPACITY: usize = 1000;

pub const HOST_VAR: &str = "WEBHOOK_HOST";
pub const PORT_VAR: &str = "WEBHOOK_PORT";
pub const CAPACITY_VAR: &str = "WEBHOOK_BUFFER_CAPACITY";

/// Errors raised while reading configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be an IP address, got '{value}'")]
    InvalidHost { var: &'static str, value: String },
    #[error("{var} must be a port number, got '{value}'")]
    InvalidPort { var: &'static str, value: String },
    #[error("{var} must be a positive integer, got '{value}'")]
    InvalidCapacity { var: &'static str, value: String },
}

/// Runtime configuration for the webhook server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub capacity: NonZeroUsize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            capacity: NonZeroUsize::new(DEFAULT_CAPACITY).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl ServerConfig {
    /// Create from environment variables, loading `.env` first
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Create from an arbitrary variable lookup; unset or blank variables use defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(value) = read(HOST_VAR) {
            config.host = value
                .parse()
                .map_err(|_| ConfigError::InvalidHost { var: HOST_VAR, value })?;
        }

        if let Some(value) = read(PORT_VAR) {
            config.port = value
                .parse()
                .map_err(|_| ConfigError::InvalidPort { var: PORT_VAR, value })?;
        }

        if let Some(value) = read(CAPACITY_VAR) {
            config.capacity = value
                .parse::<NonZeroUsize>()
                .map_err(|_| ConfigError::InvalidCapacity { var: CAPACITY_VAR, value })?;
        }

        Ok(config)
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.host.to_string(), DEFAULT_HOST);
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.capacity.get(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            (HOST_VAR, "127.0.0.1"),
            (PORT_VAR, "9000"),
            (CAPACITY_VAR, " 50 "),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:9000");
        assert_eq!(config.capacity.get(), 50);
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[(PORT_VAR, "  ")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[(CAPACITY_VAR, "0")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidCapacity {
                var: CAPACITY_VAR,
                value: "0".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            ServerConfig::from_lookup(lookup(&[(PORT_VAR, "http")])),
            Err(ConfigError::InvalidPort { .. })
        ));
        assert!(matches!(
            ServerConfig::from_lookup(lookup(&[(HOST_VAR, "localhost")])),
            Err(ConfigError::InvalidHost { .. })
        ));
        assert!(matches!(
            ServerConfig::from_lookup(lookup(&[(CAPACITY_VAR, "-5")])),
            Err(ConfigError::InvalidCapacity { .. })
        ));
    }
}
