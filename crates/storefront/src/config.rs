//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL (default: http://localhost:3000)
//! - `STOREFRONT_DATA_DIR` - Store dataset root (default: crates/storefront/data/stores)
//! - `STOREFRONT_CART_DIR` - Cart storage directory (default: crates/storefront/data/carts);
//!   set to the literal value `none` to run without durable cart storage
//! - `STOREFRONT_STATIC_DIR` - Static asset directory (default: crates/storefront/static)
//! - `STORE_ID` - Tenant override; must be listed in the dataset index,
//!   otherwise the index's default store is served
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Sentry event sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Sentry tracing sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;
use tidemark_core::StoreId;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Root directory of per-store JSON datasets
    pub data_dir: PathBuf,
    /// Directory for persisted carts; `None` runs with detached storage
    pub cart_dir: Option<PathBuf>,
    /// Static asset directory served under `/static`
    pub static_dir: PathBuf,
    /// Tenant override; falls back to the dataset index default
    pub store_id: Option<StoreId>,
    /// Sentry error tracking configuration
    pub sentry: SentryConfig,
}

/// Sentry error tracking configuration.
#[derive(Debug, Clone, Default)]
pub struct SentryConfig {
    /// DSN; tracking is disabled when unset
    pub dsn: Option<String>,
    /// Environment name (e.g. "production")
    pub environment: Option<String>,
    /// Event sample rate
    pub sample_rate: f32,
    /// Performance tracing sample rate
    pub traces_sample_rate: f32,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;
        let base_url = get_env_or_default("STOREFRONT_BASE_URL", "http://localhost:3000");
        let data_dir =
            PathBuf::from(get_env_or_default("STOREFRONT_DATA_DIR", "crates/storefront/data/stores"));
        let cart_dir = parse_cart_dir(get_env_or_default(
            "STOREFRONT_CART_DIR",
            "crates/storefront/data/carts",
        ));
        let static_dir =
            PathBuf::from(get_env_or_default("STOREFRONT_STATIC_DIR", "crates/storefront/static"));
        let store_id = get_optional_env("STORE_ID").map(StoreId::new);
        let sentry = SentryConfig::from_env()?;

        Ok(Self {
            host,
            port,
            base_url,
            data_dir,
            cart_dir,
            static_dir,
            store_id,
            sentry,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl SentryConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            dsn: get_optional_env("SENTRY_DSN"),
            environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sample_rate: get_rate("SENTRY_SAMPLE_RATE", 1.0)?,
            traces_sample_rate: get_rate("SENTRY_TRACES_SAMPLE_RATE", 0.0)?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a sample rate variable, defaulting when unset.
fn get_rate(key: &str, default: f32) -> Result<f32, ConfigError> {
    match get_optional_env(key) {
        None => Ok(default),
        Some(raw) => raw
            .parse::<f32>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
    }
}

/// Interpret the cart directory setting; the literal `none` disables
/// durable cart storage entirely.
fn parse_cart_dir(raw: String) -> Option<PathBuf> {
    if raw.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(PathBuf::from(raw))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config() -> StorefrontConfig {
        StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            data_dir: PathBuf::from("data/stores"),
            cart_dir: Some(PathBuf::from("data/carts")),
            static_dir: PathBuf::from("static"),
            store_id: None,
            sentry: SentryConfig::default(),
        }
    }

    #[test]
    fn test_socket_addr() {
        let config = test_config();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_parse_cart_dir_none_sentinel() {
        assert_eq!(parse_cart_dir("none".to_string()), None);
        assert_eq!(parse_cart_dir("NONE".to_string()), None);
        assert_eq!(
            parse_cart_dir("data/carts".to_string()),
            Some(PathBuf::from("data/carts"))
        );
    }

    #[test]
    #[allow(unsafe_code)] // env::set_var is unsafe in edition 2024
    fn test_get_rate_rejects_garbage() {
        // Use a variable name no other test sets.
        unsafe { std::env::set_var("TIDEMARK_TEST_RATE", "not-a-float") };
        let err = get_rate("TIDEMARK_TEST_RATE", 1.0).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "TIDEMARK_TEST_RATE"));
        unsafe { std::env::remove_var("TIDEMARK_TEST_RATE") };
    }
}
