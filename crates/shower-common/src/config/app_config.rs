//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::env;

/// Environment variable holding the hosted store endpoint
pub const STORE_URL_VAR: &str = "PUBLIC_SUPABASE_URL";

/// Environment variable holding the hosted store public key
pub const STORE_KEY_VAR: &str = "PUBLIC_SUPABASE_ANON_KEY";

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub store: StoreConfig,
    pub database: Option<DatabaseConfig>,
    pub event: EventConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Which storage backend serves the three collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Hosted store over its REST interface
    #[default]
    Rest,
    /// Direct PostgreSQL connection to the same tables
    Postgres,
    /// Process-local store, contents lost on restart
    Memory,
}

impl StoreBackend {
    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rest" => Some(Self::Rest),
            "postgres" => Some(Self::Postgres),
            "memory" => Some(Self::Memory),
            _ => None,
        }
    }
}

/// Hosted store configuration
///
/// `url` and `anon_key` stay optional here; whether their absence is fatal
/// depends on the context the client is created in.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    pub url: Option<String>,
    pub anon_key: Option<String>,
    #[serde(default = "default_store_timeout")]
    pub timeout_secs: u64,
}

impl StoreConfig {
    /// Both endpoint and key are present and non-empty
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.url.as_deref().is_some_and(|s| !s.is_empty())
            && self.anon_key.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Database configuration (direct PostgreSQL backend only)
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Event configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EventConfig {
    /// Instant the countdown runs to
    pub starts_at: DateTime<Utc>,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "shower-site".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_store_timeout() -> u64 {
    15
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_event_date() -> &'static str {
    "2024-12-31T18:00:00Z"
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is present but malformed, or if the
    /// PostgreSQL backend is selected without `DATABASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// # Errors
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let parsed = |key: &'static str| -> Result<Option<u64>, ConfigError> {
            lookup(key)
                .map(|v| {
                    v.trim()
                        .parse::<u64>()
                        .map_err(|_| ConfigError::InvalidValue(key, v))
                })
                .transpose()
        };

        let env = match lookup("APP_ENV") {
            Some(v) => Environment::parse(&v).ok_or(ConfigError::InvalidValue("APP_ENV", v))?,
            None => default_env(),
        };

        let backend = match lookup("STORE_BACKEND") {
            Some(v) => {
                StoreBackend::parse(&v).ok_or(ConfigError::InvalidValue("STORE_BACKEND", v))?
            }
            None => StoreBackend::default(),
        };

        let database = match lookup("DATABASE_URL") {
            Some(url) => Some(DatabaseConfig {
                url,
                max_connections: parsed("DATABASE_MAX_CONNECTIONS")?
                    .map_or_else(default_max_connections, |v| v as u32),
                min_connections: parsed("DATABASE_MIN_CONNECTIONS")?
                    .map_or_else(default_min_connections, |v| v as u32),
            }),
            None if backend == StoreBackend::Postgres => {
                return Err(ConfigError::MissingVar("DATABASE_URL"));
            }
            None => None,
        };

        let event_date = lookup("EVENT_DATE").unwrap_or_else(|| default_event_date().to_string());
        let starts_at = DateTime::parse_from_rfc3339(event_date.trim())
            .map_err(|_| ConfigError::InvalidValue("EVENT_DATE", event_date.clone()))?
            .with_timezone(&Utc);

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            api: ServerConfig {
                host: lookup("API_HOST").unwrap_or_else(default_host),
                port: parsed("API_PORT")?.map_or_else(default_port, |v| v as u16),
            },
            store: StoreConfig {
                backend,
                url: lookup(STORE_URL_VAR).filter(|s| !s.is_empty()),
                anon_key: lookup(STORE_KEY_VAR).filter(|s| !s.is_empty()),
                timeout_secs: parsed("STORE_TIMEOUT_SECS")?.unwrap_or_else(default_store_timeout),
            },
            database,
            event: EventConfig { starts_at },
            rate_limit: RateLimitConfig {
                requests_per_second: parsed("RATE_LIMIT_REQUESTS_PER_SECOND")?
                    .map_or_else(default_requests_per_second, |v| v as u32),
                burst: parsed("RATE_LIMIT_BURST")?.map_or_else(default_burst, |v| v as u32),
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|s| !s.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_environment_is_production() {
        assert!(!Environment::Development.is_production());
        assert!(!Environment::Staging.is_production());
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn test_server_address() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        };
        assert_eq!(config.address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_defaults_without_any_variable() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.app.name, "shower-site");
        assert_eq!(config.app.env, Environment::Development);
        assert_eq!(config.api.port, 8080);
        assert_eq!(config.store.backend, StoreBackend::Rest);
        assert!(!config.store.has_credentials());
        assert!(config.database.is_none());
        assert_eq!(config.event.starts_at.to_rfc3339(), "2024-12-31T18:00:00+00:00");
    }

    #[test]
    fn test_store_credentials() {
        let config = config_from(&[
            (STORE_URL_VAR, "https://abc.supabase.co"),
            (STORE_KEY_VAR, "public-key"),
        ])
        .unwrap();
        assert!(config.store.has_credentials());
        assert_eq!(config.store.url.as_deref(), Some("https://abc.supabase.co"));

        let config = config_from(&[(STORE_URL_VAR, "https://abc.supabase.co"), (STORE_KEY_VAR, "")])
            .unwrap();
        assert!(!config.store.has_credentials());
    }

    #[test]
    fn test_postgres_backend_requires_database_url() {
        let err = config_from(&[("STORE_BACKEND", "postgres")]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("DATABASE_URL")));

        let config = config_from(&[
            ("STORE_BACKEND", "postgres"),
            ("DATABASE_URL", "postgres://localhost/shower"),
            ("DATABASE_MAX_CONNECTIONS", "4"),
        ])
        .unwrap();
        let database = config.database.unwrap();
        assert_eq!(database.max_connections, 4);
        assert_eq!(database.min_connections, 1);
    }

    #[test]
    fn test_event_date_with_offset() {
        let config = config_from(&[("EVENT_DATE", "2025-03-15T16:00:00-05:00")]).unwrap();
        assert_eq!(config.event.starts_at.to_rfc3339(), "2025-03-15T21:00:00+00:00");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            config_from(&[("API_PORT", "eighty")]),
            Err(ConfigError::InvalidValue("API_PORT", _))
        ));
        assert!(matches!(
            config_from(&[("EVENT_DATE", "tomorrow")]),
            Err(ConfigError::InvalidValue("EVENT_DATE", _))
        ));
        assert!(matches!(
            config_from(&[("STORE_BACKEND", "mongo")]),
            Err(ConfigError::InvalidValue("STORE_BACKEND", _))
        ));
    }

    #[test]
    fn test_cors_origins_are_split() {
        let config = config_from(&[(
            "CORS_ALLOWED_ORIGINS",
            "https://a.example, https://b.example,",
        )])
        .unwrap();
        assert_eq!(
            config.cors.allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }
}
