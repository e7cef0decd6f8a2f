//! Property-based tests for the category filter
//!
//! The filter is purely local: toggling never touches the backend, and the
//! visible list is always the loaded list restricted to one category name.

use catalog_admin::admin_app::catalog::ProductPayload;
use catalog_admin::admin_app::{CatalogBackend, CatalogController};
use catalog_admin::shared::catalog::{Category, Product, ProductId};
use catalog_admin::shared::error::ApiError;
use proptest::prelude::*;

const CATEGORY_NAMES: [&str; 4] = ["Tools", "Paint", "Garden", "Plumbing"];

/// Read-only backend serving a fixed catalog
struct FixedCatalog {
    products: Vec<Product>,
}

impl CatalogBackend for FixedCatalog {
    fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        Ok(self.products.clone())
    }

    fn create_product(&self, _payload: &ProductPayload) -> Result<Option<Product>, ApiError> {
        Err(ApiError::status(405, "read-only"))
    }

    fn update_product(&self, _id: ProductId, _payload: &ProductPayload) -> Result<Option<Product>, ApiError> {
        Err(ApiError::status(405, "read-only"))
    }

    fn delete_product(&self, _id: ProductId) -> Result<(), ApiError> {
        Err(ApiError::status(405, "read-only"))
    }

    fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        Ok(CATEGORY_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| Category::new(i as i64 + 1, *name))
            .collect())
    }
}

fn product_strategy() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(prop::sample::subsequence(CATEGORY_NAMES.to_vec(), 0..=3), 0..12).prop_map(
        |memberships| {
            memberships
                .into_iter()
                .enumerate()
                .map(|(i, names)| Product {
                    id: Some(i as i64 + 1),
                    name: format!("Product {}", i + 1),
                    description: None,
                    price: 1.0 + i as f64,
                    image_url: None,
                    category_ids: Vec::new(),
                    category_names: names.into_iter().map(str::to_string).collect(),
                })
                .collect()
        },
    )
}

fn mounted(products: Vec<Product>) -> CatalogController<FixedCatalog> {
    let mut controller = CatalogController::new(FixedCatalog { products });
    controller.mount().unwrap();
    controller
}

fn visible_ids(controller: &CatalogController<FixedCatalog>) -> Vec<Option<ProductId>> {
    controller.visible_products().iter().map(|p| p.id).collect()
}

proptest! {
    #[test]
    fn test_toggle_twice_shows_everything(
        products in product_strategy(),
        pick in 0..CATEGORY_NAMES.len(),
    ) {
        let mut controller = mounted(products.clone());
        let name = CATEGORY_NAMES[pick];

        controller.toggle_filter(name).unwrap();
        controller.toggle_filter(name).unwrap();

        prop_assert_eq!(controller.filter(), None);
        prop_assert_eq!(controller.visible_products().len(), products.len());
    }

    #[test]
    fn test_last_selected_category_wins(
        products in product_strategy(),
        first in 0..CATEGORY_NAMES.len(),
        second in 0..CATEGORY_NAMES.len(),
    ) {
        prop_assume!(first != second);
        let mut controller = mounted(products.clone());

        controller.toggle_filter(CATEGORY_NAMES[first]).unwrap();
        controller.toggle_filter(CATEGORY_NAMES[second]).unwrap();

        let expected: Vec<Option<ProductId>> = products
            .iter()
            .filter(|p| p.in_category(CATEGORY_NAMES[second]))
            .map(|p| p.id)
            .collect();
        prop_assert_eq!(controller.filter(), Some(CATEGORY_NAMES[second]));
        prop_assert_eq!(visible_ids(&controller), expected);
    }

    #[test]
    fn test_visible_products_keep_list_order(
        products in product_strategy(),
        pick in 0..CATEGORY_NAMES.len(),
    ) {
        let mut controller = mounted(products);
        controller.toggle_filter(CATEGORY_NAMES[pick]).unwrap();

        let ids = visible_ids(&controller);
        let mut sorted = ids.clone();
        sorted.sort();
        prop_assert_eq!(ids, sorted);
    }

    #[test]
    fn test_unknown_category_leaves_filter(
        products in product_strategy(),
        name in "[a-z]{1,8}",
    ) {
        let mut controller = mounted(products);
        prop_assert!(controller.toggle_filter(&name).is_err());
        prop_assert_eq!(controller.filter(), None);
    }
}
