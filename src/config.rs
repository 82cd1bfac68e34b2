//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::str::FromStr;
use std::sync::LazyLock;
use std::time::Duration;

use crate::{
    constants::{
        DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_MAX_BODY_BYTES, DEFAULT_PAGE_SIZE,
        DEFAULT_REQUEST_TIMEOUT_SECONDS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, MAX_PAGE_SIZE,
    },
    models::Page,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub pagination: PaginationConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub log_format: LogFormat,
    pub request_timeout: Duration,
    pub max_body_bytes: usize,
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue("LOG_FORMAT".to_string())),
        }
    }
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// List endpoint paging configuration
#[derive(Debug, Clone, Copy)]
pub struct PaginationConfig {
    pub default_page_size: u32,
    pub max_page_size: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            pagination: PaginationConfig::from_env()?,
        })
    }
}

/// Read an optional variable, falling back to `default` and parsing the result
fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name.to_string())),
        Err(_) => Ok(default),
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: parse_var("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            log_format: parse_var("LOG_FORMAT", LogFormat::Pretty)?,
            request_timeout: Duration::from_secs(parse_var(
                "REQUEST_TIMEOUT_SECONDS",
                DEFAULT_REQUEST_TIMEOUT_SECONDS,
            )?),
            max_body_bytes: parse_var("MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?,
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS", DEFAULT_DATABASE_MAX_CONNECTIONS)?,
        })
    }
}

impl PaginationConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            default_page_size: parse_var("DEFAULT_PAGE_SIZE", DEFAULT_PAGE_SIZE)?,
            max_page_size: parse_var("MAX_PAGE_SIZE", MAX_PAGE_SIZE)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Page request from optional query values, clamped to the configured bounds
    pub fn page(&self, page: Option<u32>, limit: Option<u32>) -> Page {
        Page::new(page, limit, self.default_page_size, self.max_page_size)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.default_page_size == 0 {
            return Err(ConfigError::InvalidValue("DEFAULT_PAGE_SIZE".to_string()));
        }
        if self.max_page_size < self.default_page_size {
            return Err(ConfigError::InvalidValue("MAX_PAGE_SIZE".to_string()));
        }
        Ok(())
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let pagination = PaginationConfig::default();
        assert_eq!(pagination.default_page_size, 10);
        assert_eq!(pagination.max_page_size, 100);
        assert!(pagination.validate().is_ok());
        assert_eq!(DEFAULT_SERVER_HOST, "0.0.0.0");
        assert_eq!(DEFAULT_SERVER_PORT, 8080);
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("PRETTY".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_pagination_rejects_inverted_bounds() {
        let config = PaginationConfig {
            default_page_size: 50,
            max_page_size: 20,
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue(v)) if v == "MAX_PAGE_SIZE"));

        let zero = PaginationConfig {
            default_page_size: 0,
            max_page_size: 20,
        };
        assert!(zero.validate().is_err());
    }

    #[test]
    fn test_page_uses_configured_bounds() {
        let pagination = PaginationConfig {
            default_page_size: 25,
            max_page_size: 40,
        };
        assert_eq!(pagination.page(None, None).limit, 25);
        assert_eq!(pagination.page(Some(2), Some(500)).limit, 40);
    }
}
