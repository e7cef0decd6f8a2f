//! Catalog API Client
//!
//! Thin wrappers over the backend's REST endpoints. Every call performs exactly
//! one HTTP request; nothing is retried, cached or reinterpreted beyond turning a
//! non-success status into an [`ApiError`].

use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::runtime::Runtime;

use crate::admin_app::catalog::draft::ProductPayload;
use crate::admin_app::config::Config;
use crate::shared::auth::{confirmation_message, LoginRequest, RegisterRequest};
use crate::shared::catalog::{Category, Product, ProductId};
use crate::shared::error::ApiError;

const PRODUCTS_PATH: &str = "/api/products";
const CATEGORIES_PATH: &str = "/api/categories";
const LOGIN_PATH: &str = "/api/auth/login";
const REGISTER_PATH: &str = "/api/auth/register";

/// Product and category operations the catalog controller depends on
pub trait CatalogBackend {
    fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// `Ok(None)` when the write succeeded but no product record came back
    fn create_product(&self, payload: &ProductPayload) -> Result<Option<Product>, ApiError>;

    fn update_product(&self, id: ProductId, payload: &ProductPayload) -> Result<Option<Product>, ApiError>;

    fn delete_product(&self, id: ProductId) -> Result<(), ApiError>;

    fn list_categories(&self) -> Result<Vec<Category>, ApiError>;
}

/// Credential submission; both calls answer with a confirmation message
pub trait AuthBackend {
    fn login(&self, request: &LoginRequest) -> Result<String, ApiError>;

    fn register(&self, request: &RegisterRequest) -> Result<String, ApiError>;
}

/// Blocking HTTP client for the catalog backend.
///
/// Requests run on an internal tokio runtime, so methods must be called from
/// plain threads rather than from inside an async task.
#[derive(Clone)]
pub struct HttpApiClient {
    config: Config,
    client: Client,
    runtime: Arc<Runtime>,
}

impl HttpApiClient {
    pub fn new(config: Config) -> Result<Self, ApiError> {
        let client = Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs())
            .build()
            .map_err(|e| ApiError::transport(format!("Failed to build HTTP client: {}", e)))?;

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("catalog-http")
            .enable_all()
            .build()
            .map_err(|e| ApiError::Runtime {
                message: e.to_string(),
            })?;

        Ok(Self {
            config,
            client,
            runtime: Arc::new(runtime),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn product_url(&self, id: ProductId) -> String {
        self.config.api_url(&format!("{}/{}", PRODUCTS_PATH, id))
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.api_url(path);
        tracing::debug!("GET {}", url);

        self.runtime.block_on(async {
            let response = self.client.get(&url).send().await?;
            let response = check_status(response).await?;
            Ok::<_, ApiError>(response.json::<T>().await?)
        })
    }

    fn post_message<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<String, ApiError> {
        let url = self.config.api_url(path);
        tracing::debug!("POST {}", url);

        self.runtime.block_on(async {
            let response = self.client.post(&url).json(body).send().await?;
            let response = check_status(response).await?;
            let text = response.text().await?;
            Ok::<_, ApiError>(confirmation_message(&text))
        })
    }
}

impl CatalogBackend for HttpApiClient {
    fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json(PRODUCTS_PATH)
    }

    fn create_product(&self, payload: &ProductPayload) -> Result<Option<Product>, ApiError> {
        let url = self.config.api_url(PRODUCTS_PATH);
        tracing::debug!("POST {} ({} fields)", url, payload.fields.len());

        self.runtime.block_on(async {
            let form = multipart_form(payload)?;
            let response = self.client.post(&url).multipart(form).send().await?;
            let response = check_status(response).await?;
            Ok::<_, ApiError>(saved_product(response).await)
        })
    }

    fn update_product(&self, id: ProductId, payload: &ProductPayload) -> Result<Option<Product>, ApiError> {
        let url = self.product_url(id);
        tracing::debug!("PUT {} ({} fields)", url, payload.fields.len());

        self.runtime.block_on(async {
            let form = multipart_form(payload)?;
            let response = self.client.put(&url).multipart(form).send().await?;
            let response = check_status(response).await?;
            Ok::<_, ApiError>(saved_product(response).await)
        })
    }

    fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        let url = self.product_url(id);
        tracing::debug!("DELETE {}", url);

        self.runtime.block_on(async {
            let response = self.client.delete(&url).send().await?;
            check_status(response).await?;
            Ok::<_, ApiError>(())
        })
    }

    fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json(CATEGORIES_PATH)
    }
}

impl AuthBackend for HttpApiClient {
    fn login(&self, request: &LoginRequest) -> Result<String, ApiError> {
        self.post_message(LOGIN_PATH, request)
    }

    fn register(&self, request: &RegisterRequest) -> Result<String, ApiError> {
        self.post_message(REGISTER_PATH, request)
    }
}

/// Build the multipart body: scalar fields as text parts, image as a file part
fn multipart_form(payload: &ProductPayload) -> Result<Form, ApiError> {
    let mut form = Form::new();
    for (field, value) in &payload.fields {
        form = form.text(field.key(), value.clone());
    }

    if let Some(image) = &payload.image {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.content_type)
            .map_err(|e| ApiError::transport(format!("Invalid image content type: {}", e)))?;
        form = form.part("image", part);
    }

    Ok(form)
}

/// Decode the record a write echoes back. The write already succeeded, so an
/// unreadable body is logged rather than reported as a failure.
async fn saved_product(response: Response) -> Option<Product> {
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("Product saved, but the response body could not be read: {}", e);
            return None;
        }
    };
    match serde_json::from_str::<Product>(&body) {
        Ok(product) => Some(product),
        Err(e) => {
            tracing::warn!("Product saved, but the response was not a product record: {}", e);
            None
        }
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ApiError::status(
        status.as_u16(),
        failure_message(status.as_u16(), &body),
    ))
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Message shown for a failed call: the backend's `message` field, else the
/// raw body, else a generic line naming the status
pub(crate) fn failure_message(status: u16, body: &str) -> String {
    if let Ok(ErrorBody { message: Some(message) }) = serde_json::from_str::<ErrorBody>(body) {
        if !message.trim().is_empty() {
            return message;
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed.starts_with('{') {
        format!("Request failed with status code {}", status)
    } else {
        confirmation_message(trimmed)
    }
}
