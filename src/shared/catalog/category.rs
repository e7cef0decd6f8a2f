//! Category Data Structure

use serde::{Deserialize, Serialize};

/// Backend identifier of a category
pub type CategoryId = i64;

/// A product category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    /// Unique display label, also used as the filter key
    pub name: String,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
