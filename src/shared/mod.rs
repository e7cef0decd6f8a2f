//! Shared Module
//!
//! Types that describe the backend's HTTP contract, independent of any UI:
//! catalog entities, auth payloads, configuration and error types.

/// Product and category records
pub mod catalog;

/// Auth request payloads
pub mod auth;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use catalog::{Category, CategoryId, Product, ProductId};
pub use auth::{LoginRequest, RegisterRequest};
pub use error::{ApiError, ValidationError};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
