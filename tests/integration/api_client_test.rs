//! HTTP client integration tests
//!
//! Each call against a mockito server: method, path, body shape and the
//! error message surfaced on failure.

use assert_matches::assert_matches;
use catalog_admin::admin_app::catalog::ImageUpload;
use catalog_admin::admin_app::{CatalogBackend, ProductDraft};
use catalog_admin::shared::error::ApiError;
use mockito::Matcher;
use pretty_assertions::assert_eq;

use crate::common::{paint, product, product_json, sample_products, tools, MockCatalog};

fn text_part(name: &str, value: &str) -> Matcher {
    Matcher::Regex(format!(r#"name="{}"\r\n\r\n{}\r\n"#, name, regex_escape(value)))
}

fn regex_escape(value: &str) -> String {
    value
        .chars()
        .flat_map(|c| {
            if "\\.+*?()|[]{}^$".contains(c) {
                vec!['\\', c]
            } else {
                vec![c]
            }
        })
        .collect()
}

fn hammer_draft() -> ProductDraft {
    let mut draft = ProductDraft::new();
    draft.name = "Hammer".to_string();
    draft.description = "Claw hammer".to_string();
    draft.price = 12.5;
    draft.category_ids.insert(tools().id);
    draft.category_ids.insert(paint().id);
    draft
}

#[test]
fn test_list_products_decodes_records() {
    let mut catalog = MockCatalog::start();
    let mock = catalog.list_products(&sample_products());

    let products = crate::assert_ok!(catalog.client().list_products());

    mock.assert();
    assert_eq!(products, sample_products());
    assert_eq!(products[2].category_label(), "Tools, Paint");
}

#[test]
fn test_list_categories() {
    let mut catalog = MockCatalog::start();
    let mock = catalog.list_categories();

    let categories = crate::assert_ok!(catalog.client().list_categories());

    mock.assert();
    assert_eq!(categories, vec![tools(), paint()]);
}

#[test]
fn test_create_product_posts_multipart() {
    let mut catalog = MockCatalog::start();
    let created = product(9, "Hammer", 12.5, &[tools(), paint()]);
    let mock = catalog
        .server
        .mock("POST", "/api/products")
        .match_header("content-type", Matcher::Regex("^multipart/form-data".to_string()))
        .match_body(Matcher::AllOf(vec![
            text_part("name", "Hammer"),
            text_part("description", "Claw hammer"),
            text_part("price", "12.5"),
            text_part("categoryIds", "1"),
            text_part("categoryIds", "2"),
        ]))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(product_json(&created).to_string())
        .create();

    let result = catalog.client().create_product(&hammer_draft().to_payload());

    mock.assert();
    assert_eq!(crate::assert_ok!(result), Some(created));
}

#[test]
fn test_create_product_attaches_image() {
    let mut catalog = MockCatalog::start();
    let created = product(9, "Hammer", 12.5, &[tools()]);
    let mock = catalog
        .server
        .mock("POST", "/api/products")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="image"; filename="hammer.png""#.to_string()),
            Matcher::Regex("(?i)content-type: image/png".to_string()),
            Matcher::Regex("png-bytes".to_string()),
        ]))
        .with_status(201)
        .with_body(product_json(&created).to_string())
        .create();

    let mut draft = hammer_draft();
    draft.image = Some(ImageUpload::new("hammer.png", "image/png", b"png-bytes".to_vec()));
    let result = catalog.client().create_product(&draft.to_payload());

    mock.assert();
    crate::assert_ok!(result);
}

#[test]
fn test_update_product_puts_to_id_path() {
    let mut catalog = MockCatalog::start();
    let updated = product(3, "Hammer", 12.5, &[tools(), paint()]);
    let mock = catalog
        .server
        .mock("PUT", "/api/products/3")
        .match_body(text_part("name", "Hammer"))
        .with_status(200)
        .with_body(product_json(&updated).to_string())
        .create();

    let result = catalog.client().update_product(3, &hammer_draft().to_payload());

    mock.assert();
    assert_eq!(crate::assert_ok!(result), Some(updated));
}

#[test]
fn test_update_with_empty_body_is_success() {
    let mut catalog = MockCatalog::start();
    let mock = catalog
        .server
        .mock("PUT", "/api/products/3")
        .with_status(204)
        .create();

    let result = catalog.client().update_product(3, &hammer_draft().to_payload());

    mock.assert();
    assert_eq!(crate::assert_ok!(result), None);
}

#[test]
fn test_delete_product() {
    let mut catalog = MockCatalog::start();
    let mock = catalog
        .server
        .mock("DELETE", "/api/products/2")
        .with_status(204)
        .create();

    crate::assert_ok!(catalog.client().delete_product(2));
    mock.assert();
}

#[test]
fn test_error_message_comes_from_body() {
    let mut catalog = MockCatalog::start();
    catalog
        .server
        .mock("DELETE", "/api/products/2")
        .with_status(409)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"Product is referenced by an order"}"#)
        .create();

    let err = catalog.client().delete_product(2).unwrap_err();

    assert_matches!(err, ApiError::Status { status: 409, .. });
    assert_eq!(err.to_string(), "Product is referenced by an order");
}

#[test]
fn test_error_without_body_names_status() {
    let mut catalog = MockCatalog::start();
    catalog
        .server
        .mock("GET", "/api/products")
        .with_status(500)
        .create();

    let err = catalog.client().list_products().unwrap_err();

    assert_eq!(err.status_code(), Some(500));
    crate::assert_contains!(err.to_string(), "500");
}

#[test]
fn test_malformed_body_is_decode_error() {
    let mut catalog = MockCatalog::start();
    catalog
        .server
        .mock("GET", "/api/categories")
        .with_status(200)
        .with_body("not json")
        .create();

    let err = catalog.client().list_categories().unwrap_err();
    assert_matches!(err, ApiError::Decode { .. });
}

#[test]
fn test_unreachable_server_is_transport_error() {
    let config = catalog_admin::admin_app::Config::for_server("http://127.0.0.1:1").unwrap();
    let client = catalog_admin::admin_app::HttpApiClient::new(config).unwrap();

    let err = client.list_products().unwrap_err();
    assert_matches!(err, ApiError::Transport { .. });
    crate::assert_contains!(err.to_string(), "Network error");
}
