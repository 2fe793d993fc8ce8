//! Web service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional and fall back to local-development defaults.
//!
//! - `CONTATO_HOST` - Bind address (default: 127.0.0.1)
//! - `CONTATO_PORT` - Listen port (default: 3000)
//! - `CONTATO_DATA_FILE` - Path of the JSON contact store (default: contatos.json)
//! - `VIACEP_BASE_URL` - Address-lookup service base URL
//!   (default: <https://viacep.com.br/ws>)
//! - `NOMINATIM_BASE_URL` - Geocoding service base URL
//!   (default: <https://nominatim.openstreetmap.org>)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

const DEFAULT_VIACEP_BASE_URL: &str = "https://viacep.com.br/ws";
const DEFAULT_NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Web application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Path of the JSON file backing the contact store
    pub data_file: PathBuf,
    /// Base URL of the address-lookup service
    pub viacep_base_url: Url,
    /// Base URL of the geocoding service
    pub nominatim_base_url: Url,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present. Every
    /// variable has a default, so loading only fails on malformed values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("CONTATO_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("CONTATO_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("CONTATO_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("CONTATO_PORT".to_string(), e.to_string()))?;
        let data_file = PathBuf::from(get_env_or_default("CONTATO_DATA_FILE", "contatos.json"));
        let viacep_base_url = get_base_url("VIACEP_BASE_URL", DEFAULT_VIACEP_BASE_URL)?;
        let nominatim_base_url = get_base_url("NOMINATIM_BASE_URL", DEFAULT_NOMINATIM_BASE_URL)?;

        Ok(Self {
            host,
            port,
            data_file,
            viacep_base_url,
            nominatim_base_url,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get an environment variable as an absolute URL, with a default.
fn get_base_url(key: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = get_env_or_default(key, default);
    Url::parse(&raw).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_urls_parse() {
        assert!(Url::parse(DEFAULT_VIACEP_BASE_URL).is_ok());
        assert!(Url::parse(DEFAULT_NOMINATIM_BASE_URL).is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            data_file: PathBuf::from("contatos.json"),
            viacep_base_url: Url::parse(DEFAULT_VIACEP_BASE_URL).unwrap(),
            nominatim_base_url: Url::parse(DEFAULT_NOMINATIM_BASE_URL).unwrap(),
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }
}
