//! Kasir panel configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `ACIL_API_URL` - Base URL of the SI-ACIL backend API
//! - `ACIL_API_TOKEN` - Bearer token for the backend API
//! - `KASIR_STORE_NAME` - Store name printed in receipt headers
//!
//! ## Optional
//! - `KASIR_HOST` - Bind address (default: 127.0.0.1)
//! - `KASIR_PORT` - Listen port (default: 3000)
//! - `KASIR_STORE_ADDRESS` - Street address printed under the store name
//! - `KASIR_STORE_WA` - Store WhatsApp number (last-resort share destination)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Sentry error sample rate (0.0 to 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Sentry traces sample rate (0.0 to 1.0)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use si_acil_core::StoreProfile;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Kasir panel configuration.
#[derive(Debug, Clone)]
pub struct KasirConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// SI-ACIL backend API configuration
    pub acil: AcilApiConfig,
    /// Store name printed in receipt headers
    pub store_name: String,
    /// Street address printed under the store name
    pub store_address: Option<String>,
    /// Store WhatsApp number
    pub store_wa: Option<String>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "staging", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

/// SI-ACIL backend API configuration.
///
/// Implements `Debug` manually to redact the bearer token.
#[derive(Clone)]
pub struct AcilApiConfig {
    /// Base URL of the backend API (e.g., `https://api.si-acil.id`)
    pub base_url: String,
    /// Bearer token for API access
    pub api_token: SecretString,
}

impl std::fmt::Debug for AcilApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AcilApiConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &"[REDACTED]")
            .finish()
    }
}

impl KasirConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("KASIR_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("KASIR_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("KASIR_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("KASIR_PORT".to_string(), e.to_string()))?;

        let acil = AcilApiConfig::from_env()?;

        let store_name = get_required_env("KASIR_STORE_NAME")?;
        let store_address = get_optional_env("KASIR_STORE_ADDRESS");
        let store_wa = get_optional_env("KASIR_STORE_WA");

        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = get_optional_env("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = get_optional_env("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);

        Ok(Self {
            host,
            port,
            acil,
            store_name,
            store_address,
            store_wa,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Store profile used as the read-only input to receipt formatting.
    #[must_use]
    pub fn store_profile(&self) -> StoreProfile {
        StoreProfile {
            store_name: self.store_name.clone(),
            address: self.store_address.clone(),
            wa_number: self.store_wa.clone(),
        }
    }
}

impl AcilApiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: get_required_env("ACIL_API_URL")?,
            api_token: SecretString::from(get_required_env("ACIL_API_TOKEN")?),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
