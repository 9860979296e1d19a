//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, BatchConfig, ClassifierConfig, ConfigError, CorsConfig, Environment,
    GitHubConfig, ServerConfig, StorageConfig, WebhookConfig,
};
