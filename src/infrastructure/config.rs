//! Configuration infrastructure
//!
//! Settings are layered: built-in defaults, then an optional config file
//! (any format the `config` crate understands), then environment variables
//! such as `STEAM_PRICE_CARD__STORE__REGION=BR`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::info;
use url::Url;

use super::errors::ConfigError;
use super::exchange_rate_client::ExchangeConfig;
use super::http_client::HttpClientConfig;
use super::parsing::StorePageSelectors;
use super::store_client::StoreConfig;

pub const ENV_PREFIX: &str = "STEAM_PRICE_CARD";
const ENV_SEPARATOR: &str = "__";
const APP_DIR_NAME: &str = "steam-price-card";
const CONFIG_FILE_NAME: &str = "config.json";

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub exchange: ExchangeConfig,
    pub http: HttpClientConfig,
    pub selectors: StorePageSelectors,
    pub logging: LoggingConfig,
}

/// Logging configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    pub level: String,

    /// Enable JSON formatted logs
    pub json_format: bool,

    pub console_output: bool,

    /// Write a daily rolling log file
    pub file_output: bool,

    /// Log file directory; defaults to `logs/` next to the executable
    pub log_dir: Option<PathBuf>,

    /// Module-specific log level filters (e.g., "reqwest": "info")
    pub module_filters: HashMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            console_output: true,
            file_output: false,
            log_dir: None,
            module_filters: HashMap::new(),
        }
    }
}

impl AppConfig {
    /// Defaults, then `path` if given, then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, None)
    }

    /// Same as [`load`](Self::load) with an explicit environment map in
    /// place of the process environment.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("store.base_url", &self.store.base_url),
            ("exchange.quote_url", &self.exchange.quote_url),
        ] {
            Url::parse(value)
                .map_err(|e| ConfigError::validation(format!("{name} is not a valid URL ({value}): {e}")))?;
        }

        if self.http.max_requests_per_second == 0 {
            return Err(ConfigError::validation(
                "http.max_requests_per_second must be greater than 0",
            ));
        }

        if self.http.timeout_seconds == 0 {
            return Err(ConfigError::validation("http.timeout_seconds must be greater than 0"));
        }

        Ok(())
    }
}

/// Configuration manager for locating, loading and saving the config file
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Get the application configuration directory
    pub fn get_config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get user config directory")?
            .join(APP_DIR_NAME);

        Ok(config_dir)
    }

    /// Manager for the default config file location
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(Self::get_config_dir()?.join(CONFIG_FILE_NAME)))
    }

    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// Write the default configuration on first run, then load it.
    pub async fn initialize_on_first_run(&self) -> Result<AppConfig> {
        if !self.config_path.exists() {
            info!("First run detected - writing default configuration");
            self.save_config(&AppConfig::default()).await?;
        }

        self.load_config()
    }

    /// Load the managed file with environment overrides applied
    pub fn load_config(&self) -> Result<AppConfig> {
        let config = AppConfig::load(Some(&self.config_path))
            .with_context(|| format!("Failed to load configuration from {}", self.config_path.display()))?;

        info!("Loaded configuration from: {:?}", self.config_path);
        Ok(config)
    }

    /// Save configuration to file
    pub async fn save_config(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .context("Failed to create config directory")?;
        }

        let content =
            serde_json::to_string_pretty(config).context("Failed to serialize configuration")?;

        fs::write(&self.config_path, content)
            .await
            .context("Failed to write configuration file")?;

        info!("Saved configuration to: {:?}", self.config_path);
        Ok(())
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::parsing::VideoStrategy;

    fn no_env() -> Option<HashMap<String, String>> {
        Some(HashMap::new())
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::load_with_env(None, no_env()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "store": { "region": "BR" }, "selectors": { "video_strategy": "media_container" } }"#,
        )
        .unwrap();

        let config = AppConfig::load_with_env(Some(&path), no_env()).unwrap();
        assert_eq!(config.store.region.as_deref(), Some("BR"));
        assert_eq!(config.store.base_url, "https://store.steampowered.com");
        assert_eq!(config.selectors.video_strategy, VideoStrategy::MediaContainer);
    }

    #[test]
    fn test_environment_overrides_file() {
        let env = HashMap::from([
            ("STEAM_PRICE_CARD__HTTP__TIMEOUT_SECONDS".to_string(), "5".to_string()),
            ("STEAM_PRICE_CARD__LOGGING__LEVEL".to_string(), "debug".to_string()),
        ]);

        let config = AppConfig::load_with_env(None, Some(env)).unwrap();
        assert_eq!(config.http.timeout_seconds, 5);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_validation_rejects_zero_rate() {
        let env = HashMap::from([(
            "STEAM_PRICE_CARD__HTTP__MAX_REQUESTS_PER_SECOND".to_string(),
            "0".to_string(),
        )]);
        assert!(matches!(
            AppConfig::load_with_env(None, Some(env)),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn test_validation_rejects_bad_url() {
        let mut config = AppConfig::default();
        config.exchange.quote_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[tokio::test]
    async fn test_first_run_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_path(dir.path().join("nested").join("config.json"));

        let config = manager.initialize_on_first_run().await.unwrap();

        assert!(manager.config_path().exists());
        assert_eq!(config.store, StoreConfig::default());
    }
}
