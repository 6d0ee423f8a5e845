//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod product_form;
pub mod text_input;

// Re-export for convenience
pub use app_state::{describe, AppState, Command, Mode, Notice, NoticeKind};
pub use product_form::{FormField, FormKind, FormState, FormSubmission};
pub use text_input::TextInput;
