//! Configuration management for taskbot.
//!
//! Configuration can be set via environment variables:
//! - `HOST` - Optional. Server bind host. Defaults to `0.0.0.0`.
//! - `PORT` - Optional. Server port. Defaults to `8000`.
//! - `ADMIN_TOKEN` - Optional. Bearer token required by the `GET /tasks`
//!   debug dump. When unset, the dump endpoint refuses all requests.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Operator token gating the debug dump endpoint
    pub admin_token: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `PORT` is not a valid port
    /// number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), format!("{}", e)))?;

        let admin_token = std::env::var("ADMIN_TOKEN").ok().filter(|t| !t.is_empty());

        Ok(Self {
            host,
            port,
            admin_token,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            admin_token: None,
        }
    }
}
