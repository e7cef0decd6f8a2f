//! Catalog Admin Desktop App Module
//!
//! A native egui/eframe front end for the product catalog service.
//!
//! # Architecture
//!
//! - **`config`** - Server URL resolution and asset URL building
//! - **`api`** - HTTP client for the catalog and auth endpoints
//! - **`auth`** - Login and registration flows
//! - **`catalog`** - Product catalog controller, draft and background worker
//! - **`types`** - App views and navigation
//! - **`state`** - Central state shared by the views
//! - **`views`** / **`theme`** - egui rendering
//! - **`main`** - Application entry point (binary)
//!
//! # Module Structure
//!
//! ```text
//! admin_app/
//! ├── mod.rs      - Module exports and documentation
//! ├── main.rs     - Application entry point
//! ├── config.rs   - Configuration
//! ├── api.rs      - HTTP client and backend traits
//! ├── auth.rs     - Login/register flows
//! ├── types.rs    - App views
//! ├── catalog/    - Controller, draft, worker
//! ├── state/      - AppState and the product form buffer
//! ├── views/      - Page rendering
//! └── theme/      - Colors and frames
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the admin app:
//! // cargo run --bin catalog_admin
//! ```

pub mod api;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod state;
pub mod theme;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use api::{AuthBackend, CatalogBackend, HttpApiClient};
pub use auth::{AuthPhase, AuthState, LoginFlow, RegisterFlow};
pub use catalog::{CatalogController, CatalogError, CatalogWorker, FormMode, ProductDraft};
pub use config::Config;
pub use state::AppState;
pub use types::{AppView, Navigator};
