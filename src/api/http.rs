//! Blocking REST client for the product service.

use super::ProductSource;
use crate::model::{ApiError, Product, ProductId, ProductPatch, ProductPayload};
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Default collection URL of the public demo catalog.
pub const DEFAULT_API_URL: &str = "https://api.escuelajs.co/api/v1/products";

/// `ProductSource` backed by `GET/POST {base}` and `PUT {base}/{id}`.
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: Client,
    base_url: String,
}

impl HttpProductSource {
    /// Build a client for the collection at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the HTTP client cannot be constructed
    /// (e.g. TLS backend initialization failure).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Collection URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a single product.
    pub fn item_url(&self, id: ProductId) -> String {
        format!("{}/{id}", self.base_url)
    }
}

impl ProductSource for HttpProductSource {
    fn fetch_all(&self) -> Result<Vec<Product>, ApiError> {
        debug!(url = %self.base_url, "GET products");
        let response = self
            .client
            .get(&self.base_url)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(transport)?;
        decode(response)
    }

    fn create(&self, payload: &ProductPayload) -> Result<Product, ApiError> {
        debug!(url = %self.base_url, title = %payload.title, "POST product");
        let response = self
            .client
            .post(&self.base_url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .map_err(transport)?;
        decode(response)
    }

    fn update(&self, id: ProductId, payload: &ProductPayload) -> Result<ProductPatch, ApiError> {
        let url = self.item_url(id);
        debug!(%url, "PUT product");
        let response = self
            .client
            .put(&url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .map_err(transport)?;
        decode(response)
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    warn!(error = %err, "Product service unreachable");
    ApiError::Transport(err.to_string())
}

/// Turn a response into `T`, or into the matching [`ApiError`].
fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().map_err(transport)?;

    if !status.is_success() {
        warn!(status = status.as_u16(), "Product service rejected request");
        return Err(ApiError::Rejected {
            status: status.as_u16(),
            body: rejection_body(&body),
        });
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Normalize an error body: compact JSON when it parses, trimmed text otherwise.
pub fn rejection_body(raw: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value) => value.to_string(),
        Err(_) => raw.trim().to_string(),
    }
}
