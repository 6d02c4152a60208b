//! # configs
//!
//! Immutable runtime configuration, built once at startup from the
//! environment and passed explicitly to each component. No ambient global
//! lookups anywhere else in the workspace.

use config::{Config, Environment};
use secrecy::SecretString;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite:driftboard.db?mode=rwc";
pub const DEFAULT_MODERATION_ENDPOINT: &str = "https://api.openai.com/v1/moderations";
/// Background purge cadence. Reads purge on their own; the sweep only
/// bounds how long stale rows can linger unobserved.
pub const DEFAULT_PURGE_INTERVAL_SECS: u64 = 600;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModerationConfig {
    /// API key for the external content-classification service. Required.
    pub api_key: SecretString,
    pub endpoint: String,
    /// Documented override: accept submissions when the classifier is
    /// unreachable instead of failing the request. Off by default.
    pub fail_open: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    /// Shared secret gating the admin export. Required; there is no safe
    /// default.
    pub admin_secret: SecretString,
    pub purge_interval_secs: u64,
    pub moderation: ModerationConfig,
}

impl AppConfig {
    /// Loads configuration from the environment (a `.env` file is honored).
    ///
    /// Variables use the `DRIFTBOARD` prefix with `__` as the nesting
    /// separator, e.g. `DRIFTBOARD__PORT`, `DRIFTBOARD__ADMIN_SECRET`,
    /// `DRIFTBOARD__MODERATION__API_KEY`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let config = Self::builder()?
            .add_source(
                Environment::with_prefix("DRIFTBOARD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(config.try_deserialize()?)
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError>
    {
        Config::builder()
            .set_default("port", DEFAULT_PORT as i64)?
            .set_default("database_url", DEFAULT_DATABASE_URL)?
            .set_default("purge_interval_secs", DEFAULT_PURGE_INTERVAL_SECS as i64)?
            .set_default("moderation.endpoint", DEFAULT_MODERATION_ENDPOINT)?
            .set_default("moderation.fail_open", false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn defaults_fill_everything_but_the_secrets() {
        let config: AppConfig = AppConfig::builder()
            .unwrap()
            .set_override("admin_secret", "hunter2")
            .unwrap()
            .set_override("moderation.api_key", "sk-test")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.purge_interval_secs, DEFAULT_PURGE_INTERVAL_SECS);
        assert_eq!(config.moderation.endpoint, DEFAULT_MODERATION_ENDPOINT);
        assert!(!config.moderation.fail_open);
        assert_eq!(config.admin_secret.expose_secret(), "hunter2");
    }

    #[test]
    fn secrets_are_required() {
        let result = AppConfig::builder()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize::<AppConfig>();
        assert!(result.is_err());
    }

    #[test]
    fn secrets_do_not_leak_through_debug() {
        let config: AppConfig = AppConfig::builder()
            .unwrap()
            .set_override("admin_secret", "hunter2")
            .unwrap()
            .set_override("moderation.api_key", "sk-test")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        let printed = format!("{config:?}");
        assert!(!printed.contains("hunter2"));
        assert!(!printed.contains("sk-test"));
    }
}
