//! Product Catalog Controller
//!
//! Owns the loaded products and categories, the add/edit draft, the pending
//! delete confirmation and the category filter. Every successful mutation is
//! followed by a full re-fetch of the product list; the controller never patches
//! a single entry into its list.

use crate::admin_app::api::CatalogBackend;
use crate::admin_app::catalog::draft::{FormMode, ProductDraft};
use crate::admin_app::catalog::CatalogError;
use crate::shared::catalog::{Category, Product, ProductId};

/// Result of a successful submit.
///
/// Carries the saved record when the backend echoed one back.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(Option<Product>),
    Updated(Option<Product>),
}

impl SubmitOutcome {
    /// Confirmation shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            SubmitOutcome::Created(_) => "Product added!",
            SubmitOutcome::Updated(_) => "Product updated!",
        }
    }

    pub fn product(&self) -> Option<&Product> {
        match self {
            SubmitOutcome::Created(p) | SubmitOutcome::Updated(p) => p.as_ref(),
        }
    }
}

/// Read-only copy of the controller state for rendering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    /// Products passing the active filter, in list order
    pub visible_products: Vec<Product>,
    pub draft: ProductDraft,
    pub filter: Option<String>,
    pub pending_delete: Option<ProductId>,
    pub mounted: bool,
}

impl CatalogSnapshot {
    pub fn form_mode(&self) -> FormMode {
        self.draft.mode()
    }
}

pub struct CatalogController<B> {
    backend: B,
    products: Vec<Product>,
    categories: Vec<Category>,
    draft: ProductDraft,
    filter: Option<String>,
    pending_delete: Option<ProductId>,
    mounted: bool,
}

impl<B: CatalogBackend> CatalogController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            products: Vec::new(),
            categories: Vec::new(),
            draft: ProductDraft::new(),
            filter: None,
            pending_delete: None,
            mounted: false,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    /// Editable access to the draft's form fields
    pub fn draft_mut(&mut self) -> &mut ProductDraft {
        &mut self.draft
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn pending_delete(&self) -> Option<ProductId> {
        self.pending_delete
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Initial load of categories and products. Only the first call fetches;
    /// use [`CatalogController::reload`] to retry after a failure.
    pub fn mount(&mut self) -> Result<(), CatalogError> {
        if self.mounted {
            return Ok(());
        }
        self.mounted = true;
        self.reload()
    }

    /// Re-fetch categories and products. Both are attempted; the first error wins.
    pub fn reload(&mut self) -> Result<(), CatalogError> {
        let categories = self.reload_categories();
        let products = self.reload_products();
        categories.and(products)
    }

    /// Replace the product list with the backend's current one
    pub fn reload_products(&mut self) -> Result<(), CatalogError> {
        match self.backend.list_products() {
            Ok(products) => {
                tracing::info!("Loaded {} products", products.len());
                self.products = products;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to load products: {}", e);
                Err(CatalogError::Api(e))
            }
        }
    }

    /// Replace the category list, dropping a filter whose category vanished
    pub fn reload_categories(&mut self) -> Result<(), CatalogError> {
        match self.backend.list_categories() {
            Ok(categories) => {
                tracing::info!("Loaded {} categories", categories.len());
                self.categories = categories;
                let filter_known = self
                    .filter
                    .as_ref()
                    .map_or(true, |name| self.categories.iter().any(|c| &c.name == name));
                if !filter_known {
                    self.filter = None;
                }
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to load categories: {}", e);
                Err(CatalogError::Api(e))
            }
        }
    }

    /// Switch the form to an empty "add" draft
    pub fn begin_create(&mut self) {
        self.draft.reset();
    }

    /// Load an existing product into the form
    pub fn edit(&mut self, id: ProductId) -> Result<(), CatalogError> {
        let product = self
            .find_product(id)
            .ok_or(CatalogError::UnknownProduct(id))?;
        let draft = ProductDraft::from_product(product);
        self.draft.replace_with(draft);
        Ok(())
    }

    /// Validate the draft and create or update the product it describes.
    ///
    /// Validation failures issue no request and leave the draft untouched.
    /// Backend failures keep the draft for a retry.
    pub fn submit(&mut self) -> Result<SubmitOutcome, CatalogError> {
        if let Err(e) = self.draft.validate() {
            tracing::warn!("Product form rejected: {}", e);
            return Err(CatalogError::Validation(e));
        }

        let payload = self.draft.to_payload();
        let result = match self.draft.target_id() {
            Some(id) => self
                .backend
                .update_product(id, &payload)
                .map(SubmitOutcome::Updated),
            None => self
                .backend
                .create_product(&payload)
                .map(SubmitOutcome::Created),
        };

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("Error saving product: {}", e);
                return Err(CatalogError::Api(e));
            }
        };

        match outcome.product() {
            Some(product) => tracing::info!("{} ({})", outcome.message(), product.name),
            None => tracing::info!("{}", outcome.message()),
        }
        self.draft.reset();
        self.resync()?;
        Ok(outcome)
    }

    /// Ask for confirmation before deleting a product
    pub fn request_delete(&mut self, id: ProductId) -> Result<(), CatalogError> {
        if self.find_product(id).is_none() {
            return Err(CatalogError::UnknownProduct(id));
        }
        self.pending_delete = Some(id);
        Ok(())
    }

    /// Dismiss the confirmation; nothing is sent
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the product awaiting confirmation, then re-fetch the list.
    ///
    /// Returns the deleted id, or `None` when no delete was pending.
    pub fn confirm_delete(&mut self) -> Result<Option<ProductId>, CatalogError> {
        let Some(id) = self.pending_delete.take() else {
            return Ok(None);
        };

        if let Err(e) = self.backend.delete_product(id) {
            tracing::error!("Failed to delete product {}: {}", id, e);
            return Err(CatalogError::Api(e));
        }

        tracing::info!("Deleted product {}", id);
        self.resync()?;
        Ok(Some(id))
    }

    /// Select a category filter, or clear it when `name` is already active
    pub fn toggle_filter(&mut self, name: &str) -> Result<(), CatalogError> {
        if !self.categories.iter().any(|c| c.name == name) {
            return Err(CatalogError::UnknownCategory(name.to_string()));
        }

        if self.filter.as_deref() == Some(name) {
            self.filter = None;
        } else {
            self.filter = Some(name.to_string());
        }
        Ok(())
    }

    /// The "All" control
    pub fn clear_filter(&mut self) {
        self.filter = None;
    }

    /// Products passing the active filter. Purely local.
    pub fn visible_products(&self) -> Vec<&Product> {
        match &self.filter {
            Some(name) => self.products.iter().filter(|p| p.in_category(name)).collect(),
            None => self.products.iter().collect(),
        }
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            products: self.products.clone(),
            categories: self.categories.clone(),
            visible_products: self.visible_products().into_iter().cloned().collect(),
            draft: self.draft.clone(),
            filter: self.filter.clone(),
            pending_delete: self.pending_delete,
            mounted: self.mounted,
        }
    }

    fn find_product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == Some(id))
    }

    fn resync(&mut self) -> Result<(), CatalogError> {
        self.reload_products().map_err(|e| match e {
            CatalogError::Api(api) => CatalogError::Resync(api),
            other => other,
        })
    }
}
