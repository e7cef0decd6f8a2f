//! Catalog Admin - Main Library
//!
//! Desktop administration client for a product catalog service: sign in or
//! register, then browse, filter, add, edit and delete products.
//!
//! # Module Structure
//!
//! - **`shared`** - Types exchanged with the server
//!   - Products and categories
//!   - Login/register request bodies
//!   - Error types and the base configuration builder
//!
//! - **`admin_app`** - Native desktop app (egui/eframe)
//!   - HTTP API client
//!   - Authentication flows
//!   - Product catalog controller
//!   - Views and theme
//!
//! # Usage
//!
//! The catalog controller is UI-independent and can be driven directly:
//!
//! ```rust,no_run
//! use catalog_admin::admin_app::{CatalogController, Config, HttpApiClient};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let api = HttpApiClient::new(Config::from_env()?)?;
//! let mut catalog = CatalogController::new(api);
//! catalog.mount()?;
//! for product in catalog.visible_products() {
//!     println!("{} {}", product.name, product.price_label());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! - **Native**: egui is single-threaded immediate mode GUI; HTTP calls run on
//!   a catalog worker thread and short-lived auth threads
//! - **Client**: `HttpApiClient` is `Clone` and shares one Tokio runtime
//!
//! # Error Handling
//!
//! All fallible operations return `Result<T, E>` with `thiserror` error types.
//! Server failures surface the server's own message where it sent one.

pub mod admin_app;
pub mod shared;
