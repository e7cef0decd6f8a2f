//! Integration tests
//!
//! The HTTP client and the catalog controller against a mock server

mod api_client_test;
mod auth_test;
