//! Raw form input and its validation into write payloads.
//!
//! Forms hold exactly what the user typed. Validation happens once, on submit,
//! and never touches the network.

use super::error::ValidationError;
use super::product::{ProductId, ProductPayload, FALLBACK_CATEGORY_ID};

/// Fields of the "new product" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProductForm {
    /// Required.
    pub title: String,
    /// Required; must parse as a non-negative number.
    pub price: String,
    /// Required.
    pub description: String,
    /// Optional; blank means the default category.
    pub category_id: String,
    /// Optional; blank means no images.
    pub image_url: String,
}

impl NewProductForm {
    /// Validate the form into a create payload.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`ValidationError`], checking title, price,
    /// description, then category id.
    pub fn validate(&self) -> Result<ProductPayload, ValidationError> {
        let (title, price, description) =
            validate_required(&self.title, &self.price, &self.description)?;

        let category = self.category_id.trim();
        let category_id = if category.is_empty() {
            FALLBACK_CATEGORY_ID
        } else {
            category
                .parse::<i64>()
                .map_err(|_| ValidationError::InvalidCategoryId(category.to_string()))?
        };

        let image = self.image_url.trim();
        let images = if image.is_empty() {
            Vec::new()
        } else {
            vec![image.to_string()]
        };

        Ok(ProductPayload {
            title,
            price,
            description,
            category_id,
            images,
        })
    }
}

/// Edited fields of an existing product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditProductForm {
    /// Product being edited.
    pub id: ProductId,
    /// Required.
    pub title: String,
    /// Required; must parse as a non-negative number.
    pub price: String,
    /// Required.
    pub description: String,
}

/// Validated edit, ready to be combined with the cached record's images and category.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductEdit {
    /// Product being edited.
    pub id: ProductId,
    /// New title.
    pub title: String,
    /// New price.
    pub price: f64,
    /// New description.
    pub description: String,
}

impl EditProductForm {
    /// Validate the form into an edit.
    ///
    /// # Errors
    ///
    /// Same required-field rules as [`NewProductForm::validate`].
    pub fn validate(&self) -> Result<ProductEdit, ValidationError> {
        let (title, price, description) =
            validate_required(&self.title, &self.price, &self.description)?;
        Ok(ProductEdit {
            id: self.id,
            title,
            price,
            description,
        })
    }
}

fn validate_required(
    title: &str,
    price: &str,
    description: &str,
) -> Result<(String, f64, String), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::MissingTitle);
    }
    let price_raw = price.trim();
    if price_raw.is_empty() {
        return Err(ValidationError::MissingPrice);
    }
    if description.trim().is_empty() {
        return Err(ValidationError::MissingDescription);
    }

    let price = price_raw
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
        .ok_or_else(|| ValidationError::InvalidPrice(price_raw.to_string()))?;

    Ok((title.to_string(), price, description.to_string()))
}
