//! Configuration for the pulse client.
//!
//! Settings come from environment variables only (`PULSE_` prefix);
//! there are no configuration files. Defaults point at the production
//! futures API.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Production Binance USDⓈ-M Futures REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://fapi.binance.com";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL for all REST requests (override with `PULSE_BASE_URL`)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds (override with `PULSE_TIMEOUT_SECS`)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Config {
    /// Load configuration from the environment.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("PULSE"))
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(!self.base_url.is_empty(), "base_url must not be empty");
        anyhow::ensure!(self.timeout_secs > 0, "timeout_secs must be positive");
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let config = Config {
            base_url: String::new(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = Config {
            timeout_secs: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
