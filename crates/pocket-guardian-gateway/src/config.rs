//! Gateway configuration types.
//!
//! This module defines the configuration for the HTTP gateway and how it is
//! read from environment variables.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue {
        /// Variable name.
        key: &'static str,
        /// Raw value.
        value: String,
    },
}

/// Configuration for the gateway service.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Interface to bind.
    #[serde(default = "GatewayConfig::default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "GatewayConfig::default_port")]
    pub port: u16,

    /// Allowed CORS origins.
    #[serde(default = "GatewayConfig::default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Maximum request body size in bytes.
    #[serde(default = "GatewayConfig::default_max_body")]
    pub max_body_bytes: usize,

    /// Request timeout in seconds.
    #[serde(default = "GatewayConfig::default_request_timeout")]
    pub request_timeout_seconds: u64,

    /// Seed for reproducible scans. Unset means the thread RNG.
    #[serde(default)]
    pub scan_seed: Option<u64>,
}

impl GatewayConfig {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    const fn default_port() -> u16 {
        8000
    }

    fn default_cors_origins() -> Vec<String> {
        vec!["*".to_string()]
    }

    const fn default_max_body() -> usize {
        64 * 1024 // 64 KiB
    }

    const fn default_request_timeout() -> u64 {
        30
    }

    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a numeric variable does not
    /// parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Recognized keys: `HOST`, `PORT`, `LISTEN_ADDR` (overrides both),
    /// `CORS_ORIGINS` (comma separated), `MAX_BODY_BYTES`,
    /// `REQUEST_TIMEOUT_SECONDS`, `SCAN_SEED`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a numeric variable does not
    /// parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = parse("PORT", &port)?;
        }
        if let Some(addr) = lookup("LISTEN_ADDR") {
            let (host, port) = addr
                .rsplit_once(':')
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: "LISTEN_ADDR",
                    value: addr.clone(),
                })?;
            config.port = parse("LISTEN_ADDR", port)?;
            config.host = host.to_string();
        }
        if let Some(origins) = lookup("CORS_ORIGINS") {
            config.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(bytes) = lookup("MAX_BODY_BYTES") {
            config.max_body_bytes = parse("MAX_BODY_BYTES", &bytes)?;
        }
        if let Some(secs) = lookup("REQUEST_TIMEOUT_SECONDS") {
            config.request_timeout_seconds = parse("REQUEST_TIMEOUT_SECONDS", &secs)?;
        }
        if let Some(seed) = lookup("SCAN_SEED") {
            config.scan_seed = Some(parse("SCAN_SEED", &seed)?);
        }

        Ok(config)
    }

    /// Socket address to bind, e.g. `0.0.0.0:8000`.
    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the request timeout as a `Duration`.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            cors_origins: Self::default_cors_origins(),
            max_body_bytes: Self::default_max_body(),
            request_timeout_seconds: Self::default_request_timeout(),
            scan_seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let config = GatewayConfig::default();
        assert_eq!(config.listen_addr(), "0.0.0.0:8000");
        assert_eq!(config.cors_origins, ["*"]);
        assert_eq!(config.max_body_bytes, 64 * 1024);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.scan_seed.is_none());
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = GatewayConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.listen_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn host_port_and_seed_from_environment() {
        let config = GatewayConfig::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("SCAN_SEED", "7"),
            ("CORS_ORIGINS", "http://localhost:5173, https://app.example.com"),
        ]))
        .unwrap();

        assert_eq!(config.listen_addr(), "127.0.0.1:9000");
        assert_eq!(config.scan_seed, Some(7));
        assert_eq!(
            config.cors_origins,
            ["http://localhost:5173", "https://app.example.com"]
        );
    }

    #[test]
    fn listen_addr_overrides_host_and_port() {
        let config = GatewayConfig::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("LISTEN_ADDR", "[::]:8080"),
        ]))
        .unwrap();
        assert_eq!(config.listen_addr(), "[::]:8080");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = GatewayConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "PORT",
                value: "eighty".into()
            }
        );
    }
}
