//! Application configuration structs
//!
//! Loads configuration from environment variables (and an optional `.env` file).

use serde::Deserialize;
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub webhook: WebhookConfig,
    pub storage: StorageConfig,
    pub github: GitHubConfig,
    pub batch: BatchConfig,
    pub classifier: ClassifierConfig,
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
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Webhook configuration
#[derive(Clone)]
pub struct WebhookConfig {
    /// Shared HMAC secret configured on the platform's webhook
    pub secret: String,
}

impl fmt::Debug for WebhookConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookConfig")
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Durable store configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_file: PathBuf,
}

/// External API configuration
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    pub api_url: String,
    pub timeout: Duration,
}

/// Batch refresh configuration
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Courtesy delay between successive external calls
    pub delay: Duration,
}

/// Comment classifier configuration
#[derive(Debug, Clone, Default)]
pub struct ClassifierConfig {
    /// Marker override; empty means built-in markers
    pub markers: Vec<String>,
}

/// CORS configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "reaction-feedback".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_data_file() -> PathBuf {
    PathBuf::from("./data/feedback-data.json")
}

fn default_github_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_github_timeout_secs() -> u64 {
    10
}

fn default_batch_delay_ms() -> u64 {
    1000
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a required variable is missing or a value is malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("WEBHOOK_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingVar("WEBHOOK_SECRET"))?;

        // A zero timeout would fail every fetch before it is sent
        let github_timeout_secs: u64 =
            parse_or(&lookup, "GITHUB_TIMEOUT_SECS", default_github_timeout_secs)?;
        if github_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "GITHUB_TIMEOUT_SECS",
                github_timeout_secs.to_string(),
            ));
        }

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: match lookup("APP_ENV") {
                    Some(raw) => Environment::parse(&raw)
                        .ok_or(ConfigError::InvalidValue("APP_ENV", raw))?,
                    None => default_env(),
                },
            },
            server: ServerConfig {
                host: lookup("HOST").unwrap_or_else(default_host),
                port: parse_or(&lookup, "PORT", default_port)?,
            },
            webhook: WebhookConfig { secret },
            storage: StorageConfig {
                data_file: lookup("DATA_FILE")
                    .map(PathBuf::from)
                    .unwrap_or_else(default_data_file),
            },
            github: GitHubConfig {
                api_url: lookup("GITHUB_API_URL")
                    .map(|s| s.trim_end_matches('/').to_string())
                    .unwrap_or_else(default_github_api_url),
                timeout: Duration::from_secs(github_timeout_secs),
            },
            batch: BatchConfig {
                delay: Duration::from_millis(parse_or(
                    &lookup,
                    "BATCH_DELAY_MS",
                    default_batch_delay_ms,
                )?),
            },
            classifier: ClassifierConfig {
                markers: lookup("CLASSIFIER_MARKERS")
                    .map(|s| split_list(&s, '|'))
                    .unwrap_or_default(),
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|s| split_list(&s, ','))
                    .unwrap_or_default(),
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: fn() -> T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        None => Ok(default()),
    }
}

fn split_list(raw: &str, separator: char) -> Vec<String> {
    raw.split(separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
