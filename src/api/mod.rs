//! Remote product catalog access (impure shell).
//!
//! - [`ProductSource`]: the operations the engine needs from the remote
//! - [`HttpProductSource`]: blocking REST implementation
//! - [`RequestWorker`]: runs a source on a background thread so the UI stays responsive

use crate::model::{ApiError, Product, ProductId, ProductPatch, ProductPayload};

pub mod http;
pub mod worker;

pub use http::HttpProductSource;
pub use worker::{Request, RequestOutcome, RequestWorker};

/// Black-box CRUD service holding the product catalog.
pub trait ProductSource {
    /// Fetch every product, in service order.
    ///
    /// # Errors
    ///
    /// [`ApiError`] on transport failure, non-success status, or undecodable body.
    fn fetch_all(&self) -> Result<Vec<Product>, ApiError>;

    /// Create a product. Returns the stored record with its assigned id.
    ///
    /// # Errors
    ///
    /// [`ApiError`] on transport failure, non-success status, or undecodable body.
    fn create(&self, payload: &ProductPayload) -> Result<Product, ApiError>;

    /// Replace the product with `id`. Returns whatever fields the service echoes.
    ///
    /// # Errors
    ///
    /// [`ApiError`] on transport failure, non-success status, or undecodable body.
    fn update(&self, id: ProductId, payload: &ProductPayload) -> Result<ProductPatch, ApiError>;
}

impl<S: ProductSource + ?Sized> ProductSource for Box<S> {
    fn fetch_all(&self) -> Result<Vec<Product>, ApiError> {
        (**self).fetch_all()
    }

    fn create(&self, payload: &ProductPayload) -> Result<Product, ApiError> {
        (**self).create(payload)
    }

    fn update(&self, id: ProductId, payload: &ProductPayload) -> Result<ProductPatch, ApiError> {
        (**self).update(id, payload)
    }
}
