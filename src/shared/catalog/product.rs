//! Product Data Structure
//!
//! Represents a product as the backend returns it. The `category_names` and
//! `image_url` fields are derived server-side and never sent back.

use serde::{Deserialize, Serialize};

use super::category::CategoryId;

/// Backend identifier of a product
pub type ProductId = i64;

/// A product record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Absent until the product has been persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    /// Path relative to the backend origin
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category_ids: Vec<CategoryId>,
    #[serde(default)]
    pub category_names: Vec<String>,
}

impl Product {
    /// Whether this product is filed under the category with the given name
    pub fn in_category(&self, name: &str) -> bool {
        self.category_names.iter().any(|n| n == name)
    }

    /// Category names joined for display
    pub fn category_label(&self) -> String {
        self.category_names.join(", ")
    }

    /// Price formatted for display
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }
}
