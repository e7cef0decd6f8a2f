//! Product catalog management
//!
//! - **`draft`** - the add/edit form buffer and its request payload
//! - **`controller`** - product/category state, CRUD workflow and filtering
//! - **`worker`** - runs a controller on a background thread for the UI

pub mod controller;
pub mod draft;
pub mod worker;

use thiserror::Error;

use crate::shared::catalog::ProductId;
use crate::shared::error::{ApiError, ValidationError};

pub use controller::{CatalogController, CatalogSnapshot, SubmitOutcome};
pub use draft::{FormMode, ImageUpload, PayloadField, ProductDraft, ProductPayload};
pub use worker::{CatalogCommand, CatalogEvent, CatalogWorker, Notice, NoticeKind};

/// Failure of a catalog controller operation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    /// The form broke a client-side rule; nothing was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backend call failed; local state is unchanged
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The mutation went through but re-fetching the list failed
    #[error("Saved, but reloading products failed: {0}")]
    Resync(ApiError),

    #[error("No product with id {0} is loaded")]
    UnknownProduct(ProductId),

    #[error("No category named '{0}' is loaded")]
    UnknownCategory(String),
}

impl CatalogError {
    /// Whether the error was raised before any request was made
    pub fn is_client_side(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::UnknownProduct(_) | Self::UnknownCategory(_)
        )
    }
}
