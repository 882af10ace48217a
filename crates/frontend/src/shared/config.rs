//! Client configuration
//!
//! An embedded TOML document provides the defaults. A replacement document can
//! be baked in at build time through the `CATALOG_CONFIG` environment variable.

use once_cell::sync::OnceCell;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid log level '{0}'")]
    LogLevel(String),
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Backend base URL. Empty means "same host as the page, on `port`".
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_toast_duration")]
    pub toast_duration_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: default_toast_duration(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LogConfig {
    pub fn level(&self) -> Result<log::Level, ConfigError> {
        self.level
            .parse::<log::Level>()
            .map_err(|_| ConfigError::LogLevel(self.level.clone()))
    }
}

fn default_port() -> u16 {
    5000
}

fn default_toast_duration() -> u32 {
    3000
}

fn default_log_level() -> String {
    "debug".to_string()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 5000

[ui]
toast_duration_ms = 3000

[log]
level = "debug"
"#;

static CONFIG: OnceCell<ClientConfig> = OnceCell::new();

pub fn parse_config(contents: &str) -> Result<ClientConfig, ConfigError> {
    let config: ClientConfig = toml::from_str(contents)?;
    config.log.level()?;
    Ok(config)
}

/// Load configuration from `CATALOG_CONFIG` if it was set at build time,
/// otherwise from the embedded default.
pub fn load_config() -> Result<ClientConfig, ConfigError> {
    parse_config(option_env!("CATALOG_CONFIG").unwrap_or(DEFAULT_CONFIG))
}

/// Make `config` the process-wide configuration. The first call wins.
pub fn install(config: ClientConfig) -> &'static ClientConfig {
    CONFIG.get_or_init(|| config)
}

/// Current configuration, falling back to defaults if none was installed
pub fn config() -> &'static ClientConfig {
    CONFIG.get_or_init(ClientConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.port, 5000);
        assert_eq!(config.ui.toast_duration_ms, 3000);
        assert_eq!(config.log.level().unwrap(), log::Level::Debug);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = parse_config("[api]\nbase_url = \"https://shop.example.com\"\n").unwrap();
        assert_eq!(config.api.base_url, "https://shop.example.com");
        assert_eq!(config.api.port, 5000);
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_bad_log_level() {
        let err = parse_config("[log]\nlevel = \"loud\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::LogLevel(ref l) if l == "loud"));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            parse_config("[api\nport = 1"),
            Err(ConfigError::Parse(_))
        ));
    }
}
