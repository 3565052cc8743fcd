//! Dashboard configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `HAVEN_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   `POSTGRES_URL`, then `DATABASE_URL`)
//!
//! ## Optional
//! - `HAVEN_HOST` - Bind address (default: 127.0.0.1)
//! - `HAVEN_PORT` - Listen port (default: 3000)
//! - `HAVEN_BASE_URL` - Public URL (default: `http://localhost:3000`)
//! - `HAVEN_SEED_ENDPOINT` - Mount `GET /api/seed` (default: true)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Performance trace sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Fallback database variables, in lookup order.
const DATABASE_URL_FALLBACKS: &[&str] = &["POSTGRES_URL", "DATABASE_URL"];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Dashboard application configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the dashboard
    pub base_url: Url,
    /// Whether the seeding endpoint is mounted
    pub seed_endpoint: bool,
    /// Sentry error tracking configuration
    pub sentry: SentryConfig,
}

/// Sentry error tracking configuration.
#[derive(Debug, Clone, Default)]
pub struct SentryConfig {
    /// Sentry DSN; Sentry stays disabled when unset
    pub dsn: Option<String>,
    /// Environment tag (e.g. "production")
    pub environment: Option<String>,
    /// Fraction of error events sent
    pub sample_rate: f32,
    /// Fraction of transactions traced
    pub traces_sample_rate: f32,
}

impl DashboardConfig {
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

        let database_url = get_database_url("HAVEN_DATABASE_URL")?;
        let host = parse_env("HAVEN_HOST", "127.0.0.1")?;
        let port = parse_env("HAVEN_PORT", "3000")?;
        let base_url = parse_env("HAVEN_BASE_URL", "http://localhost:3000")?;
        let seed_endpoint = parse_bool(
            "HAVEN_SEED_ENDPOINT",
            &get_env_or_default("HAVEN_SEED_ENDPOINT", "true"),
        )?;

        Ok(Self {
            database_url,
            host,
            port,
            base_url,
            seed_endpoint,
            sentry: SentryConfig::from_env()?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether cookies should carry the `Secure` attribute.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.scheme() == "https"
    }
}

impl SentryConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            dsn: get_optional_env("SENTRY_DSN"),
            environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sample_rate: parse_env("SENTRY_SAMPLE_RATE", "1.0")?,
            traces_sample_rate: parse_env("SENTRY_TRACES_SAMPLE_RATE", "0.0")?,
        })
    }
}

/// Resolve the database URL alone, for tools that do not serve HTTP.
///
/// # Errors
///
/// Returns `ConfigError::MissingEnvVar` if no database variable is set.
pub fn database_url_from_env() -> Result<SecretString, ConfigError> {
    let _ = dotenvy::dotenv();
    get_database_url("HAVEN_DATABASE_URL")
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get database URL, trying the primary key and then the generic fallbacks.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    std::iter::once(primary_key)
        .chain(DATABASE_URL_FALLBACKS.iter().copied())
        .find_map(get_optional_env)
        .map(SecretString::from)
        .ok_or_else(|| ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional, non-empty environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Parse an environment variable (or its default) into `T`.
fn parse_env<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    parse_value(key, &get_env_or_default(key, default))
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse a boolean flag, accepting the usual spellings.
fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got '{other}'"),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> DashboardConfig {
        DashboardConfig {
            database_url: SecretString::from("postgres://localhost/haven"),
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: base_url.parse().unwrap(),
            seed_endpoint: true,
            sentry: SentryConfig::default(),
        }
    }

    #[test]
    fn test_parse_bool_spellings() {
        assert!(parse_bool("X", "true").unwrap());
        assert!(parse_bool("X", " YES ").unwrap());
        assert!(parse_bool("X", "1").unwrap());
        assert!(!parse_bool("X", "off").unwrap());
        assert!(!parse_bool("X", "False").unwrap());
    }

    #[test]
    fn test_parse_bool_rejects_garbage() {
        let err = parse_bool("HAVEN_SEED_ENDPOINT", "maybe").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "HAVEN_SEED_ENDPOINT"));
    }

    #[test]
    fn test_parse_value_reports_key() {
        let err = parse_value::<u16>("HAVEN_PORT", "99999").unwrap_err();
        assert!(err.to_string().contains("HAVEN_PORT"));
        assert_eq!(parse_value::<u16>("HAVEN_PORT", " 8080 ").unwrap(), 8080);
    }

    #[test]
    fn test_parse_value_base_url() {
        assert!(parse_value::<Url>("HAVEN_BASE_URL", "not a url").is_err());
    }

    #[test]
    fn test_socket_addr() {
        let addr = config("http://localhost:3000").socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_is_secure_follows_scheme() {
        assert!(!config("http://localhost:3000").is_secure());
        assert!(config("https://haven.example").is_secure());
    }

    #[test]
    fn test_debug_redacts_database_url() {
        let debug_output = format!("{:?}", config("http://localhost:3000"));
        assert!(!debug_output.contains("postgres://localhost/haven"));
    }
}
