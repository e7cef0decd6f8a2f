//! Mock server helpers for integration tests
//!
//! Wraps a `mockito` server with the catalog routes the client talks to.

use catalog_admin::admin_app::{Config, HttpApiClient};
use catalog_admin::shared::catalog::Product;
use mockito::{Mock, Server, ServerGuard};

use super::fixtures::{categories_json, products_json};

/// Mock catalog backend plus a client pointed at it
pub struct MockCatalog {
    pub server: ServerGuard,
}

impl MockCatalog {
    pub fn start() -> Self {
        Self {
            server: Server::new(),
        }
    }

    pub fn client(&self) -> HttpApiClient {
        let config = Config::for_server(self.server.url()).unwrap();
        HttpApiClient::new(config).unwrap()
    }

    pub fn list_products(&mut self, products: &[Product]) -> Mock {
        self.server
            .mock("GET", "/api/products")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(products_json(products))
            .create()
    }

    pub fn list_categories(&mut self) -> Mock {
        self.server
            .mock("GET", "/api/categories")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(categories_json())
            .create()
    }
}
