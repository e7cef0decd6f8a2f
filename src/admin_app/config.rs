use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default backend origin
const DEFAULT_SERVER_URL: &str = "https://localhost:7017";

/// Environment variable overriding the backend origin
pub const SERVER_URL_VAR: &str = "CATALOG_API_URL";

/// Environment variable enabling self-signed certificates (`1` to enable)
pub const ACCEPT_INVALID_CERTS_VAR: &str = "CATALOG_ACCEPT_INVALID_CERTS";

/// Application configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Config {
    /// Read the configuration from the environment, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_url =
            std::env::var(SERVER_URL_VAR).unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let accept_invalid_certs =
            std::env::var(ACCEPT_INVALID_CERTS_VAR).unwrap_or_default() == "1";

        Self::with_builder(
            AppConfig::builder()
                .server_url(server_url)
                .accept_invalid_certs(accept_invalid_certs),
        )
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Configuration pointing at an explicit origin
    pub fn for_server(server_url: impl Into<String>) -> Result<Self, ConfigError> {
        Self::with_builder(AppConfig::builder().server_url(server_url))
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    /// Resolve a server-provided image path against the origin
    pub fn asset_url(&self, relative: &str) -> String {
        if relative.starts_with("http://") || relative.starts_with("https://") {
            return relative.to_string();
        }
        if relative.starts_with('/') {
            self.api_url(relative)
        } else {
            format!("{}/{}", self.server_url(), relative)
        }
    }

    pub fn server_url(&self) -> &str {
        &self.app.server_url
    }

    /// Whether self-signed certificates are trusted
    pub fn accept_invalid_certs(&self) -> bool {
        self.app.accept_invalid_certs
    }
}
