//! Owned product cache.
//!
//! Ordered, id-unique sequence of products. The only mutations are full
//! replacement, prepend and merge-in-place.

use crate::model::{Product, ProductId, ProductPatch};
use std::collections::HashSet;
use tracing::warn;

/// In-memory copy of the remote catalog.
#[derive(Debug, Clone, Default)]
pub struct ProductCache {
    products: Vec<Product>,
}

impl ProductCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole cache with a fresh fetch.
    ///
    /// Later duplicates of an id are dropped so ids stay unique.
    pub fn replace_all(&mut self, products: Vec<Product>) {
        let mut seen = HashSet::with_capacity(products.len());
        let mut unique = Vec::with_capacity(products.len());
        for product in products {
            if seen.insert(product.id) {
                unique.push(product);
            } else {
                warn!(id = %product.id, "Dropping duplicate product id from fetch");
            }
        }
        self.products = unique;
    }

    /// Insert at the head (most recent first).
    ///
    /// An existing record with the same id is removed first.
    pub fn prepend(&mut self, product: Product) {
        if let Some(index) = self.position(product.id) {
            warn!(id = %product.id, "Created product id already cached, replacing");
            self.products.remove(index);
        }
        self.products.insert(0, product);
    }

    /// Merge `patch` over the cached record with `id`.
    ///
    /// Returns `false` when no such record is cached. If the patch carries a
    /// different id that already belongs to another record, the id change is
    /// ignored.
    pub fn merge(&mut self, id: ProductId, mut patch: ProductPatch) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        if let Some(new_id) = patch.id {
            if new_id != id && self.position(new_id).is_some() {
                warn!(%id, %new_id, "Update response id collides with another product");
                patch.id = None;
            }
        }
        self.products[index].merge(patch);
        true
    }

    /// Product with `id`, if cached.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }

    /// Products in cache order.
    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }

    /// Number of cached products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
