//! Server Configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Server configuration, read from a TOML file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address
    pub bind_addr: String,
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Allow cross-origin requests from any origin
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".into(),
            log_level: "info".into(),
            cors_permissive: true,
        }
    }
}

impl ServerConfig {
    /// Load from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `BIND_ADDR` from the environment, if set
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(addr) = std::env::var("BIND_ADDR") {
            self.bind_addr = addr;
        }
        self
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert!(config.cors_permissive);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = ServerConfig::parse("bind_addr = \"127.0.0.1:9000\"").unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:9000");
        assert_eq!(config.log_level, "info");
        assert!(config.cors_permissive);
    }

    #[test]
    fn test_invalid_file() {
        assert!(matches!(ServerConfig::parse("cors_permissive = \"yes\""), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = ServerConfig::load("/nonexistent/insurance-api.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
