//! Auth endpoint integration tests

use catalog_admin::admin_app::{AppView, AuthBackend, AuthPhase, LoginFlow, RegisterFlow};
use catalog_admin::shared::auth::{LoginRequest, RegisterRequest};
use mockito::Matcher;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::MockCatalog;

#[test]
fn test_login_posts_credentials_as_json() {
    let mut catalog = MockCatalog::start();
    let mock = catalog
        .server
        .mock("POST", "/api/auth/login")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "email": "admin@example.com",
            "password": "hunter2"
        })))
        .with_status(200)
        .with_body("Login successful")
        .create();

    let request = LoginRequest {
        email: "admin@example.com".to_string(),
        password: "hunter2".to_string(),
    };
    let message = crate::assert_ok!(catalog.client().login(&request));

    mock.assert();
    assert_eq!(message, "Login successful");
}

#[test]
fn test_register_uses_camel_case_body() {
    let mut catalog = MockCatalog::start();
    let mock = catalog
        .server
        .mock("POST", "/api/auth/register")
        .match_body(Matcher::Json(json!({
            "name": "Admin",
            "email": "admin@example.com",
            "password": "hunter2",
            "confirmPassword": "hunter2"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"User registered successfully"}"#)
        .create();

    let request = RegisterRequest {
        name: "Admin".to_string(),
        email: "admin@example.com".to_string(),
        password: "hunter2".to_string(),
        confirm_password: "hunter2".to_string(),
    };
    let message = crate::assert_ok!(catalog.client().register(&request));

    mock.assert();
    assert_eq!(message, "User registered successfully");
}

#[test]
fn test_login_flow_against_server() {
    let mut catalog = MockCatalog::start();
    catalog
        .server
        .mock("POST", "/api/auth/login")
        .with_status(401)
        .with_body("Invalid email or password")
        .create();
    let client = catalog.client();

    let mut view = AppView::Login;
    let mut flow = LoginFlow::new();
    flow.form.email = "admin@example.com".to_string();
    flow.form.password = "wrong".to_string();
    flow.submit(&client, &mut view);

    assert_eq!(flow.state.phase, AuthPhase::Failed);
    assert_eq!(flow.state.error.as_deref(), Some("Invalid email or password"));
    assert_eq!(view, AppView::Login);
}

#[test]
fn test_register_mismatch_sends_nothing() {
    let mut catalog = MockCatalog::start();
    let mock = catalog
        .server
        .mock("POST", "/api/auth/register")
        .expect(0)
        .create();
    let client = catalog.client();

    let mut flow = RegisterFlow::new();
    flow.form.password = "one".to_string();
    flow.form.confirm_password = "two".to_string();
    flow.submit(&client);

    mock.assert();
    assert_eq!(flow.state.error.as_deref(), Some("Passwords do not match!"));
}
