//! Shared Error Types
//!
//! Errors produced by the HTTP client and by client-side form validation.
//!
//! # Error Categories
//!
//! - `ApiError` - transport and backend failures, forwarded untouched to the caller
//! - `ValidationError` - rules checked before any request is sent
//!
//! # Usage
//!
//! ```rust
//! use catalog_admin::shared::error::ApiError;
//!
//! let error = ApiError::status(409, "Product name already exists");
//! assert_eq!(error.to_string(), "Product name already exists");
//! ```
//!
//! All error types are `Clone + Send + Sync` so they can travel over channels
//! between the UI thread and background workers.
use thiserror::Error;

/// Failure of a single HTTP call.
///
/// The client never retries or reinterprets these; the message text is
/// displayed to the user as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Connection, TLS or IO failure before a response arrived
    #[error("Network error: {message}")]
    Transport {
        /// Human-readable error message
        message: String,
    },

    /// The backend answered with a non-success status
    #[error("{message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Backend-provided message, or a generic fallback
        message: String,
    },

    /// A success response whose body could not be decoded
    #[error("Failed to parse response: {message}")]
    Decode {
        /// Human-readable error message
        message: String,
    },

    /// The client's async runtime could not be started
    #[error("Failed to create runtime: {message}")]
    Runtime {
        /// Human-readable error message
        message: String,
    },
}

impl ApiError {
    /// Create a new transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new status error
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Create a new decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// HTTP status of the failed call, if the backend answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(format!("JSON error: {}", err))
    }
}

/// Client-side rule violated by a form before submission.
///
/// The display text is what the user sees in the alert.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Product name is required!")]
    MissingName,

    #[error("Price must be greater than zero!")]
    InvalidPrice,

    #[error("Price must be a number!")]
    PriceNotANumber,

    #[error("Select at least one category!")]
    NoCategorySelected,

    #[error("Passwords do not match!")]
    PasswordMismatch,
}

impl ValidationError {
    /// Name of the form field the rule applies to
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingName => "name",
            Self::InvalidPrice | Self::PriceNotANumber => "price",
            Self::NoCategorySelected => "categoryIds",
            Self::PasswordMismatch => "confirmPassword",
        }
    }
}
