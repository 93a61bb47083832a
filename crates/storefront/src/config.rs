//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional — the demo runs with defaults out of the box.
//! - `CATALOG_URL` - Products resource of the remote catalog
//!   (default: `https://fakestoreapi.com/products`)
//! - `CATALOG_TIMEOUT_SECS` - Catalog request timeout in seconds
//!   (default: 10)

use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default products resource.
const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

/// Default catalog request timeout, in seconds.
const DEFAULT_CATALOG_TIMEOUT_SECS: &str = "10";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Products resource of the remote catalog.
    pub catalog_url: Url,
    /// Request timeout for catalog fetches.
    pub catalog_timeout: Duration,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_url: default_catalog_url(),
            catalog_timeout: Duration::from_secs(10),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let catalog_url = parse_catalog_url(&get_env_or_default(
            "CATALOG_URL",
            DEFAULT_CATALOG_URL,
        ))?;

        let timeout_secs = get_env_or_default("CATALOG_TIMEOUT_SECS", DEFAULT_CATALOG_TIMEOUT_SECS)
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("CATALOG_TIMEOUT_SECS".to_string(), e.to_string())
            })?;

        Ok(Self {
            catalog_url,
            catalog_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Parse and validate a catalog URL.
fn parse_catalog_url(raw: &str) -> Result<Url, ConfigError> {
    raw.parse::<Url>()
        .map_err(|e| ConfigError::InvalidEnvVar("CATALOG_URL".to_string(), e.to_string()))
}

/// The built-in catalog endpoint.
fn default_catalog_url() -> Url {
    // The default is a literal and always parses.
    DEFAULT_CATALOG_URL
        .parse()
        .expect("default catalog URL is valid")
}

/// Get an environment variable or a default value.
fn get_env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_url_parses() {
        let url = default_catalog_url();
        assert_eq!(url.as_str(), "https://fakestoreapi.com/products");
    }

    #[test]
    fn test_parse_catalog_url_rejects_garbage() {
        assert!(parse_catalog_url("not a url").is_err());
        assert!(parse_catalog_url("http://localhost:9999/products").is_ok());
    }

    #[test]
    fn test_default_config() {
        let config = StorefrontConfig::default();
        assert_eq!(config.catalog_timeout, Duration::from_secs(10));
    }
}
