//! Application configuration module
//!
//! Provides configuration types for the application.

use reqwest::Url;
use thiserror::Error;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend origin, without a trailing slash
    pub server_url: String,
    /// Accept self-signed TLS certificates (local development backends)
    pub accept_invalid_certs: bool,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.server_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", self.server_url, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ConfigError::InvalidUrl(format!(
                "unsupported scheme '{}' in {}",
                other, self.server_url
            ))),
        }
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    accept_invalid_certs: bool,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Allow invalid TLS certificates
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let server_url = self
            .server_url
            .ok_or(ConfigError::MissingValue("server_url"))?
            .trim()
            .trim_end_matches('/')
            .to_string();

        let config = AppConfig {
            server_url,
            accept_invalid_certs: self.accept_invalid_certs,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
