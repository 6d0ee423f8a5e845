//! Product records as served by the remote catalog.
//!
//! Three shapes travel over the wire:
//! - [`Product`]: a full record, returned by fetch-all and create
//! - [`ProductPatch`]: the update response, merged field-by-field over the cached record
//! - [`ProductPayload`]: the POST/PUT body

use serde::{Deserialize, Serialize};
use std::fmt;

// ===== ProductId =====

/// Remote identifier of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Wrap a raw id.
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw id.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ===== Category =====

/// Category reference embedded in a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Remote category id.
    pub id: i64,
    /// Display name; may be absent in write echoes.
    #[serde(default)]
    pub name: String,
}

// ===== Product =====

/// A product record.
///
/// Unknown JSON fields (timestamps, slugs, ...) are ignored on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique remote id.
    pub id: ProductId,
    /// Display title, matched by search.
    pub title: String,
    /// Non-negative price.
    pub price: f64,
    /// Free text, shown under the table for the selected row.
    #[serde(default)]
    pub description: String,
    /// Category, `None` when the record has none.
    #[serde(default)]
    pub category: Option<Category>,
    /// Image URLs in remote order, possibly empty.
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// Category name, or `None` when the product has no category.
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }

    /// First image URL cleaned of stray brackets and quotes.
    ///
    /// The remote sometimes returns URLs wrapped as `["https://..."]` inside the
    /// string itself. Returns `None` unless the cleaned value is an http(s) URL.
    pub fn thumbnail_url(&self) -> Option<String> {
        let raw = self.images.first()?;
        let cleaned: String = raw
            .chars()
            .filter(|c| !matches!(c, '[' | ']' | '"'))
            .collect();
        cleaned.starts_with("http").then_some(cleaned)
    }

    /// Overwrite fields present in `patch`, keeping everything else.
    pub fn merge(&mut self, patch: ProductPatch) {
        if let Some(id) = patch.id {
            self.id = id;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = Some(category);
        }
        if let Some(images) = patch.images {
            self.images = images;
        }
    }
}

// ===== ProductPatch =====

/// Partial product returned by an update.
///
/// Every field is optional: the remote does not necessarily echo images or
/// category, and those must survive the merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    /// Echoed id.
    #[serde(default)]
    pub id: Option<ProductId>,
    /// Echoed title.
    #[serde(default)]
    pub title: Option<String>,
    /// Echoed price.
    #[serde(default)]
    pub price: Option<f64>,
    /// Echoed description.
    #[serde(default)]
    pub description: Option<String>,
    /// Echoed category.
    #[serde(default)]
    pub category: Option<Category>,
    /// Echoed images.
    #[serde(default)]
    pub images: Option<Vec<String>>,
}

impl From<Product> for ProductPatch {
    fn from(product: Product) -> Self {
        Self {
            id: Some(product.id),
            title: Some(product.title),
            price: Some(product.price),
            description: Some(product.description),
            category: product.category,
            images: Some(product.images),
        }
    }
}

// ===== ProductPayload =====

/// Body of a create (POST) or update (PUT) request.
///
/// The remote rejects writes that omit `categoryId` or `images`, even when
/// neither changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    /// Product title.
    pub title: String,
    /// Product price.
    pub price: f64,
    /// Product description.
    pub description: String,
    /// Serialized as `categoryId`.
    pub category_id: i64,
    /// Image URLs, required even when unchanged.
    pub images: Vec<String>,
}

/// Image list used when an update targets a product missing from the cache.
pub const FALLBACK_IMAGE_URL: &str = "https://placehold.co/600x400";

/// Category id used when neither the form nor the cached record supplies one.
pub const FALLBACK_CATEGORY_ID: i64 = 1;
