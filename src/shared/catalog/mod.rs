//! Catalog Module
//!
//! Data structures exchanged with the catalog backend:
//!
//! - `Product` - A product record as returned by `GET /api/products`
//! - `Category` - A category label products can be filed under
//!
//! # Usage
//!
//! ```rust
//! use catalog_admin::shared::catalog::{Category, Product};
//! ```

pub mod category;
pub mod product;

// Re-export all types
pub use category::{Category, CategoryId};
pub use product::{Product, ProductId};
