//! Configuration module
//!
//! Reads a TOML file (default ~/.config/hotel-backoffice/config.toml);
//! every section falls back to sane defaults when missing.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseSection,
    #[serde(default)]
    pub billing: BillingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub staff: StaffConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSection {
    #[serde(default = "default_database_url")]
    pub url: String,
}

/// Billing provider settings. `provider = "mock"` runs without a real
/// provider and records calls in memory; `provider = "http"` talks to a
/// Stripe-compatible REST API.
#[derive(Debug, Clone, Deserialize)]
pub struct BillingConfig {
    #[serde(default = "default_billing_provider")]
    pub provider: String,
    #[serde(default = "default_billing_api_base")]
    pub api_base: String,
    #[serde(default)]
    pub secret_key: String,
    #[serde(default = "default_billing_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaffConfig {
    /// Permission names granted to every new employee and admin.
    #[serde(default = "default_permissions")]
    pub default_permissions: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_database_url() -> String {
    "sqlite://./hotel.db?mode=rwc".to_string()
}

fn default_billing_provider() -> String {
    "mock".to_string()
}

fn default_billing_api_base() -> String {
    "https://api.stripe.com".to_string()
}

fn default_billing_timeout_secs() -> u64 {
    10
}

fn default_currency() -> String {
    "usd".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_permissions() -> Vec<String> {
    vec![
        "reservations.read".to_string(),
        "customers.read".to_string(),
    ]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: default_database_url(),
        }
    }
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            provider: default_billing_provider(),
            api_base: default_billing_api_base(),
            secret_key: String::new(),
            timeout_secs: default_billing_timeout_secs(),
            currency: default_currency(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for StaffConfig {
    fn default() -> Self {
        Self {
            default_permissions: default_permissions(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        toml::from_str(&raw).map_err(ConfigError::Parse)
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl BillingConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(std::io::Error),
    #[error("invalid config file: {0}")]
    Parse(toml::de::Error),
}

/// Default config location: `~/.config/hotel-backoffice/config.toml`.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hotel-backoffice")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_sections_missing() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.billing.provider, "mock");
        assert_eq!(cfg.billing.currency, "usd");
        assert!(!cfg.staff.default_permissions.is_empty());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [billing]
            provider = "http"
            secret_key = "sk_test_123"
            currency = "brl"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.billing.provider, "http");
        assert_eq!(cfg.billing.currency, "brl");
        assert_eq!(cfg.billing.timeout_secs, 10);
        assert_eq!(cfg.server.host, "0.0.0.0");
    }
}
