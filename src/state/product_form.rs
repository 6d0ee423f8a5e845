//! Create/edit form state.
//!
//! Holds one [`TextInput`] per field and which field has focus. Submitting
//! turns the raw text into a validated request payload via the model forms.

use super::text_input::{handle_edit_key, TextInput};
use crate::model::{
    EditProductForm, NewProductForm, Product, ProductEdit, ProductId, ProductPayload,
    ValidationError,
};
use crossterm::event::KeyEvent;

/// Which record the form writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// POST a new product.
    Create,
    /// PUT over an existing product.
    Edit(ProductId),
}

/// One labelled input of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Product title.
    Title,
    /// Price as typed.
    Price,
    /// Free-text description.
    Description,
    /// Category id, create only.
    CategoryId,
    /// Single image URL, create only.
    ImageUrl,
}

impl FormField {
    /// Label shown left of the input.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Price => "Price",
            FormField::Description => "Description",
            FormField::CategoryId => "Category ID",
            FormField::ImageUrl => "Image URL",
        }
    }

    /// Optional fields may be left blank.
    pub fn is_optional(self) -> bool {
        matches!(self, FormField::CategoryId | FormField::ImageUrl)
    }
}

const CREATE_FIELDS: [FormField; 5] = [
    FormField::Title,
    FormField::Price,
    FormField::Description,
    FormField::CategoryId,
    FormField::ImageUrl,
];

// Category and images are carried over from the cached record on edit.
const EDIT_FIELDS: [FormField; 3] = [FormField::Title, FormField::Price, FormField::Description];

/// Validated result of submitting a form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormSubmission {
    /// Body for a create request.
    Create(ProductPayload),
    /// Edited fields, merged with the cached record before sending.
    Edit(ProductEdit),
}

/// Inputs and focus of an open create/edit modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    kind: FormKind,
    fields: Vec<(FormField, TextInput)>,
    focus: usize,
}

impl FormState {
    /// Empty "new product" form.
    pub fn create() -> Self {
        Self {
            kind: FormKind::Create,
            fields: CREATE_FIELDS
                .iter()
                .map(|&f| (f, TextInput::default()))
                .collect(),
            focus: 0,
        }
    }

    /// Edit form pre-filled from `product`.
    pub fn edit(product: &Product) -> Self {
        let prefill = |field: FormField| match field {
            FormField::Title => product.title.clone(),
            FormField::Price => product.price.to_string(),
            FormField::Description => product.description.clone(),
            FormField::CategoryId | FormField::ImageUrl => String::new(),
        };
        Self {
            kind: FormKind::Edit(product.id),
            fields: EDIT_FIELDS
                .iter()
                .map(|&f| (f, TextInput::new(prefill(f))))
                .collect(),
            focus: 0,
        }
    }

    /// Create or edit.
    pub fn kind(&self) -> FormKind {
        self.kind
    }

    /// Modal title.
    pub fn title(&self) -> String {
        match self.kind {
            FormKind::Create => "New Product".to_string(),
            FormKind::Edit(id) => format!("Edit Product #{id}"),
        }
    }

    /// Fields in display order.
    pub fn fields(&self) -> impl Iterator<Item = (FormField, &TextInput)> {
        self.fields.iter().map(|(f, input)| (*f, input))
    }

    /// Field receiving key input.
    pub fn focused_field(&self) -> FormField {
        self.fields[self.focus].0
    }

    /// Current text of `field`, empty if the form lacks it.
    pub fn value(&self, field: FormField) -> &str {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map_or("", |(_, input)| input.value())
    }

    /// Move focus to the next field, wrapping.
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    /// Move focus to the previous field, wrapping.
    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// Route an editing key to the focused field. Returns whether it was consumed.
    pub fn edit_focused(&mut self, key: KeyEvent) -> bool {
        let input = &mut self.fields[self.focus].1;
        match handle_edit_key(input, key) {
            Some(edited) => {
                *input = edited;
                true
            }
            None => false,
        }
    }

    /// Validate the current input.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`]; the form is left unchanged so the
    /// user can correct it.
    pub fn submit(&self) -> Result<FormSubmission, ValidationError> {
        let text = |field| self.value(field).to_string();
        match self.kind {
            FormKind::Create => NewProductForm {
                title: text(FormField::Title),
                price: text(FormField::Price),
                description: text(FormField::Description),
                category_id: text(FormField::CategoryId),
                image_url: text(FormField::ImageUrl),
            }
            .validate()
            .map(FormSubmission::Create),
            FormKind::Edit(id) => EditProductForm {
                id,
                title: text(FormField::Title),
                price: text(FormField::Price),
                description: text(FormField::Description),
            }
            .validate()
            .map(FormSubmission::Edit),
        }
    }
}
