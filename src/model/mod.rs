//! Domain model: product records, form input, errors, key actions.

pub mod error;
pub mod form;
pub mod key_action;
pub mod product;

pub use error::{ApiError, AppError, ExportError, ValidationError};
pub use form::{EditProductForm, NewProductForm, ProductEdit};
pub use key_action::KeyAction;
pub use product::{
    Category, Product, ProductId, ProductPatch, ProductPayload, FALLBACK_CATEGORY_ID,
    FALLBACK_IMAGE_URL,
};
