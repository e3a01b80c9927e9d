//! # Configuration Management
//!
//! Loads application configuration from layered sources and freezes it for
//! the process lifetime:
//!
//! 1. Built-in defaults (the `Default` impl below)
//! 2. `config.toml` in the working directory, if present
//! 3. Environment variables with the `APP_` prefix
//! 4. Deployment-platform variables: `HOST`, `PORT`, `AI_MODEL_API_URL`,
//!    `APP_ENV`
//!
//! There is no runtime mutation path; handlers read the copy stored in the
//! shared state.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub detection: DetectionConfig,
    /// Environment name ("development", "staging", ...); informational,
    /// surfaced by the health endpoint.
    pub environment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Where the external AI detection service lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Base URL; the client appends the fixed detect path to it.
    pub base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            detection: DetectionConfig {
                base_url: "http://localhost:8000".to_string(),
            },
            environment: "development".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let mut settings = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("_"));

        // Deployment platforms set these without the APP_ prefix
        if let Ok(host) = env::var("HOST") {
            settings = settings.set_override("server.host", host)?;
        }
        if let Ok(port) = env::var("PORT") {
            settings = settings.set_override("server.port", port)?;
        }
        if let Ok(base_url) = env::var("AI_MODEL_API_URL") {
            settings = settings.set_override("detection.base_url", base_url)?;
        }
        if let Ok(environment) = env::var("APP_ENV") {
            settings = settings.set_override("environment", environment)?;
        }

        let config = settings.build()?.try_deserialize()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(anyhow::anyhow!("Server port cannot be 0"));
        }

        if self.detection.base_url.is_empty() {
            return Err(anyhow::anyhow!("Detection service base URL cannot be empty"));
        }

        if !self.detection.base_url.starts_with("http://")
            && !self.detection.base_url.starts_with("https://")
        {
            return Err(anyhow::anyhow!(
                "Detection service base URL must start with http:// or https://"
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.detection.base_url, "http://localhost:8000");
        assert_eq!(config.environment, "development");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_base_url() {
        let mut config = AppConfig::default();
        config.detection.base_url = String::new();
        assert!(config.validate().is_err());

        config.detection.base_url = "localhost:8000".to_string();
        assert!(config.validate().is_err());
    }
}
