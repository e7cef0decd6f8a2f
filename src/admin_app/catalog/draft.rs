//! Product Draft
//!
//! The add/edit form's mutation buffer and its mapping to a request payload.

use std::collections::BTreeSet;
use std::path::Path;

use crate::shared::catalog::{CategoryId, Product, ProductId};
use crate::shared::error::ValidationError;

/// An image file chosen for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Read an image from disk, guessing its content type from the extension
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        let content_type = content_type_for(path).to_string();

        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }
}

fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Whether the form creates a new product or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ProductId),
}

impl FormMode {
    pub fn caption(&self) -> &'static str {
        match self {
            FormMode::Create => "Add Product",
            FormMode::Edit(_) => "Edit Product",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Add Product",
            FormMode::Edit(_) => "Update Product",
        }
    }
}

/// Not-yet-persisted product form state.
///
/// The edit target is private: it is only set by [`ProductDraft::from_product`]
/// and cleared by [`ProductDraft::reset`], so "editing" and "target id set"
/// cannot disagree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category_ids: BTreeSet<CategoryId>,
    /// A newly chosen image; existing remote images are never loaded back
    pub image: Option<ImageUpload>,
    target_id: Option<ProductId>,
    revision: u64,
}

impl ProductDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate a draft for editing an existing product
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price,
            category_ids: product.category_ids.iter().copied().collect(),
            image: None,
            target_id: product.id,
            revision: 0,
        }
    }

    pub fn target_id(&self) -> Option<ProductId> {
        self.target_id
    }

    pub fn is_editing(&self) -> bool {
        self.target_id.is_some()
    }

    pub fn mode(&self) -> FormMode {
        match self.target_id {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        }
    }

    /// Incremented whenever the draft is replaced wholesale (reset or edit)
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Back to an empty create-mode draft
    pub fn reset(&mut self) {
        let revision = self.revision + 1;
        *self = Self {
            revision,
            ..Self::default()
        };
    }

    pub(crate) fn replace_with(&mut self, mut next: ProductDraft) {
        next.revision = self.revision + 1;
        *self = next;
    }

    /// Copy the user-editable fields from another draft, keeping this draft's
    /// target and revision
    pub fn copy_fields_from(&mut self, other: &ProductDraft) {
        self.name = other.name.clone();
        self.description = other.description.clone();
        self.price = other.price;
        self.category_ids = other.category_ids.clone();
        self.image = other.image.clone();
    }

    /// Select or deselect a category
    pub fn toggle_category(&mut self, id: CategoryId) {
        if !self.category_ids.remove(&id) {
            self.category_ids.insert(id);
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(ValidationError::InvalidPrice);
        }
        if self.category_ids.is_empty() {
            return Err(ValidationError::NoCategorySelected);
        }
        Ok(())
    }

    /// Map the draft onto the enumerated request fields
    pub fn to_payload(&self) -> ProductPayload {
        let mut fields = vec![
            (PayloadField::Name, self.name.clone()),
            (PayloadField::Description, self.description.clone()),
            (PayloadField::Price, self.price.to_string()),
        ];
        fields.extend(
            self.category_ids
                .iter()
                .map(|id| (PayloadField::CategoryIds, id.to_string())),
        );

        ProductPayload {
            fields,
            image: self.image.clone(),
        }
    }
}

/// Scalar fields a product write carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadField {
    Name,
    Description,
    Price,
    /// Repeated once per selected category
    CategoryIds,
}

impl PayloadField {
    /// Form field name expected by the backend
    pub fn key(&self) -> &'static str {
        match self {
            PayloadField::Name => "name",
            PayloadField::Description => "description",
            PayloadField::Price => "price",
            PayloadField::CategoryIds => "categoryIds",
        }
    }
}

/// Transport-independent body of a create or update call
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPayload {
    pub fields: Vec<(PayloadField, String)>,
    /// Only present when a new file was chosen
    pub image: Option<ImageUpload>,
}

impl ProductPayload {
    /// All values recorded for a field, in order
    pub fn values(&self, field: PayloadField) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
            .collect()
    }
}
