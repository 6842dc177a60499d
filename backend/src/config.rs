//! Server configuration file support.
//!
//! Settings are read from a TOML file and then overridden by environment
//! variables. Every field has a default, so a missing file is not an error.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{var} must be {expected}, got '{value}'")]
    InvalidEnv {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Complete server configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub limits: LimitSettings,
}

/// Bind address settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Request guards applied before any computation starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitSettings {
    /// Largest number of integers a single range request may cover
    #[serde(default = "default_max_range_span")]
    pub max_range_span: u64,
    /// Largest starting number accepted by any route
    #[serde(default = "default_max_number")]
    pub max_number: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_range_span() -> u64 {
    100_000
}

fn default_max_number() -> u64 {
    // Largest integer a JavaScript client can represent exactly.
    (1 << 53) - 1
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LimitSettings {
    fn default() -> Self {
        Self {
            max_range_span: default_max_range_span(),
            max_number: default_max_number(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(ServerConfig)` if successful
    /// * `Err(ConfigError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `collatz.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Falls back to defaults when no file exists.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("collatz.toml"),
            PathBuf::from("backend/collatz.toml"),
            PathBuf::from("../collatz.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Apply environment variable overrides.
    ///
    /// # Environment Variables
    /// - `HOST`: Server host
    /// - `PORT`: Server port
    /// - `COLLATZ_MAX_RANGE_SPAN`: Largest range a request may cover
    /// - `COLLATZ_MAX_NUMBER`: Largest accepted starting number
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Some(port) = parse_env("PORT", "a valid port number")? {
            self.server.port = port;
        }
        if let Some(span) = parse_env("COLLATZ_MAX_RANGE_SPAN", "a positive integer")? {
            self.limits.max_range_span = span;
        }
        if let Some(max) = parse_env("COLLATZ_MAX_NUMBER", "a positive integer")? {
            self.limits.max_number = max;
        }
        Ok(self)
    }

    /// Default file (if any) plus environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_default_location()?.apply_env_overrides()
    }

    /// `host:port` string to bind to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_env<T: std::str::FromStr>(
    var: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv {
                var,
                expected,
                value,
            }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.limits.max_range_span, 100_000);
        assert_eq!(config.limits.max_number, 9_007_199_254_740_991);
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = ServerConfig::from_toml_str(
            r#"
            [server]
            port = 9000

            [limits]
            max_range_span = 50
            "#,
        )
        .unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.limits.max_range_span, 50);
        assert_eq!(config.limits.max_number, default_max_number());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(ServerConfig::from_toml_str("").unwrap(), ServerConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let err = ServerConfig::from_toml_str("[server]\nport = \"abc\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ServerConfig::from_file("/nonexistent/collatz.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
