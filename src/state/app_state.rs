//! Application state and transitions.
//!
//! AppState wraps the view-state engine with everything the admin screen needs
//! on top of it: the input mode, the selected row, and request bookkeeping.
//! Transitions are synchronous and side-effect free. Anything that touches
//! the outside world is returned as a [`Command`] for the shell to carry out.

use super::product_form::{FormState, FormSubmission};
use super::text_input::{handle_edit_key, TextInput};
use crate::api::{Request, RequestOutcome};
use crate::config::KeyBindings;
use crate::model::{ApiError, ExportError, KeyAction, Product};
use crate::view_state::ViewStateEngine;
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};
use std::path::Path;
use tracing::{debug, info, warn};

// ===== Notice =====

/// Severity of a notice, which picks its border color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Success or neutral message.
    Info,
    /// A failed request, export or validation.
    Error,
}

/// Blocking message shown in a modal until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub kind: NoticeKind,
    /// Modal title.
    pub title: String,
    /// Body text.
    pub message: String,
}

impl Notice {
    /// Informational notice.
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Error notice.
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

// ===== Mode =====

/// What currently receives keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Table navigation through key bindings.
    Browsing,
    /// Search bar has focus; every edit re-filters.
    Searching(TextInput),
    /// Create or edit modal.
    Form(FormState),
    /// Notification modal stacked over the mode it interrupted.
    Notice {
        /// Message being shown.
        notice: Notice,
        /// Mode restored on dismissal.
        previous: Box<Mode>,
    },
    /// Keyboard shortcut overlay.
    Help,
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Nothing to do.
    None,
    /// Hand a request to the background worker.
    Submit(Request),
    /// Write the filtered view to the export file.
    Export,
    /// Leave the event loop.
    Quit,
}

// ===== AppState =====

/// Engine plus the interaction state layered on top of it.
#[derive(Debug, Clone)]
pub struct AppState {
    engine: ViewStateEngine,
    /// Current input mode.
    pub mode: Mode,
    /// Row index within the visible page.
    selected: usize,
    /// A fetch-all is outstanding.
    loading: bool,
    last_loaded: Option<DateTime<Local>>,
}

impl AppState {
    /// Browsing state over `engine`, nothing loaded yet.
    pub fn new(engine: ViewStateEngine) -> Self {
        Self {
            engine,
            mode: Mode::Browsing,
            selected: 0,
            loading: false,
            last_loaded: None,
        }
    }

    /// Read access to the view-state engine.
    pub fn engine(&self) -> &ViewStateEngine {
        &self.engine
    }

    /// Selected row index within the visible page.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Product on the selected row, if the page has any rows.
    pub fn selected_product(&self) -> Option<&Product> {
        self.engine.visible_slice().get(self.selected).copied()
    }

    /// Whether a fetch-all is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// When the last successful fetch-all finished.
    pub fn last_loaded(&self) -> Option<DateTime<Local>> {
        self.last_loaded
    }

    /// Mark a reload as pending and produce the request for it.
    pub fn request_reload(&mut self) -> Command {
        self.loading = true;
        Command::Submit(Request::FetchAll)
    }

    /// Show `notice` on top of whatever mode is active.
    pub fn notify(&mut self, notice: Notice) {
        debug!(?notice, "Showing notice");
        let previous = std::mem::replace(&mut self.mode, Mode::Browsing);
        self.mode = Mode::Notice {
            notice,
            previous: Box::new(previous),
        };
    }

    // ===== Keyboard =====

    /// Route a key press according to the active mode.
    pub fn handle_key(&mut self, key: KeyEvent, bindings: &KeyBindings) -> Command {
        match std::mem::replace(&mut self.mode, Mode::Browsing) {
            Mode::Browsing => match bindings.get(key) {
                Some(action) => self.handle_action(action),
                None => Command::None,
            },
            Mode::Searching(input) => self.handle_search_key(input, key),
            Mode::Form(form) => self.handle_form_key(form, key),
            Mode::Notice { notice, previous } => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                    self.mode = *previous;
                } else {
                    self.mode = Mode::Notice { notice, previous };
                }
                Command::None
            }
            Mode::Help => {
                if !matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                    self.mode = Mode::Help;
                }
                Command::None
            }
        }
    }

    /// Apply a browsing-mode action.
    pub fn handle_action(&mut self, action: KeyAction) -> Command {
        debug!(?action, "Handling action");
        match action {
            KeyAction::SelectUp => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyAction::SelectDown => {
                let rows = self.engine.visible_slice().len();
                if self.selected + 1 < rows {
                    self.selected += 1;
                }
            }
            KeyAction::NextPage => {
                if self.engine.next_page() {
                    self.selected = 0;
                }
            }
            KeyAction::PrevPage => {
                if self.engine.prev_page() {
                    self.selected = 0;
                }
            }
            KeyAction::FirstPage => {
                self.engine.set_page(1);
                self.selected = 0;
            }
            KeyAction::LastPage => {
                let last = self.engine.total_pages();
                self.engine.set_page(last);
                self.selected = 0;
            }
            KeyAction::CyclePageSize => {
                let next = self.engine.view().page_size.next_choice();
                self.engine.set_page_size(next);
                self.selected = 0;
            }
            KeyAction::SortBy(key) => {
                self.engine.toggle_sort(key);
                self.clamp_selection();
            }
            KeyAction::StartSearch => {
                let current = self.engine.view().search_query.clone();
                self.mode = Mode::Searching(TextInput::new(current));
            }
            KeyAction::ClearSearch => {
                if !self.engine.view().search_query.is_empty() {
                    self.engine.set_search("");
                    self.selected = 0;
                }
            }
            KeyAction::EditSelected => {
                if let Some(product) = self.selected_product() {
                    self.mode = Mode::Form(FormState::edit(product));
                }
            }
            KeyAction::CreateProduct => {
                self.mode = Mode::Form(FormState::create());
            }
            KeyAction::Export => return Command::Export,
            KeyAction::Reload => return self.request_reload(),
            KeyAction::ToggleHelp => {
                self.mode = Mode::Help;
            }
            KeyAction::Quit => return Command::Quit,
        }
        Command::None
    }

    fn handle_search_key(&mut self, input: TextInput, key: KeyEvent) -> Command {
        match key.code {
            KeyCode::Enter => {
                self.mode = Mode::Browsing;
            }
            KeyCode::Esc => {
                self.engine.set_search("");
                self.selected = 0;
                self.mode = Mode::Browsing;
            }
            _ => match handle_edit_key(&input, key) {
                Some(edited) => {
                    if edited.value() != input.value() {
                        self.engine.set_search(edited.value());
                        self.selected = 0;
                    }
                    self.mode = Mode::Searching(edited);
                }
                None => self.mode = Mode::Searching(input),
            },
        }
        Command::None
    }

    fn handle_form_key(&mut self, mut form: FormState, key: KeyEvent) -> Command {
        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Browsing;
                Command::None
            }
            KeyCode::Enter => self.submit_form(form),
            KeyCode::Tab | KeyCode::Down => {
                form.focus_next();
                self.mode = Mode::Form(form);
                Command::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                form.focus_prev();
                self.mode = Mode::Form(form);
                Command::None
            }
            _ => {
                form.edit_focused(key);
                self.mode = Mode::Form(form);
                Command::None
            }
        }
    }

    /// Validate and turn the form into a request. Invalid input keeps the form
    /// open underneath an error notice and sends nothing.
    fn submit_form(&mut self, form: FormState) -> Command {
        match form.submit() {
            Ok(FormSubmission::Create(payload)) => {
                self.mode = Mode::Browsing;
                Command::Submit(Request::Create(payload))
            }
            Ok(FormSubmission::Edit(edit)) => {
                let payload = self.engine.update_payload(&edit);
                self.mode = Mode::Browsing;
                Command::Submit(Request::Update {
                    id: edit.id,
                    payload,
                })
            }
            Err(err) => {
                self.mode = Mode::Form(form);
                self.notify(Notice::error("Invalid input", err.to_string()));
                Command::None
            }
        }
    }

    // ===== Outcomes =====

    /// Fold a finished request into the cache and tell the user how it went.
    ///
    /// Failures never touch the cache.
    pub fn apply_outcome(&mut self, outcome: RequestOutcome) {
        match outcome {
            RequestOutcome::Fetched(Ok(products)) => {
                info!(count = products.len(), "Loaded products");
                self.loading = false;
                self.last_loaded = Some(Local::now());
                self.engine.replace_all(products);
                self.clamp_selection();
            }
            RequestOutcome::Fetched(Err(err)) => {
                self.loading = false;
                self.notify(Notice::error("Failed to load products", describe(&err)));
            }
            RequestOutcome::Created(Ok(product)) => {
                info!(id = %product.id, "Product created");
                let message = format!("Created \"{}\" (#{})", product.title, product.id);
                self.engine.apply_create(product);
                self.clamp_selection();
                self.notify(Notice::info("Product created", message));
            }
            RequestOutcome::Created(Err(err)) => {
                self.notify(Notice::error("Failed to create product", describe(&err)));
            }
            RequestOutcome::Updated { id, result: Ok(patch) } => {
                info!(%id, "Product updated");
                if !self.engine.apply_update(id, patch) {
                    warn!(%id, "Updated product is no longer cached");
                }
                self.clamp_selection();
                self.notify(Notice::info("Product updated", format!("Saved product #{id}")));
            }
            RequestOutcome::Updated { id, result: Err(err) } => {
                self.notify(Notice::error(
                    format!("Failed to update product #{id}"),
                    describe(&err),
                ));
            }
        }
    }

    /// Report the result of a CSV export.
    pub fn record_export(&mut self, result: Result<usize, ExportError>, path: &Path) {
        let notice = match result {
            Ok(count) => Notice::info(
                "Export complete",
                format!("Exported {count} products to {}", path.display()),
            ),
            Err(ExportError::NothingToExport) => {
                Notice::info("Export", ExportError::NothingToExport.to_string())
            }
            Err(err) => Notice::error("Export failed", err.to_string()),
        };
        self.notify(notice);
    }

    fn clamp_selection(&mut self) {
        let rows = self.engine.visible_slice().len();
        self.selected = self.selected.min(rows.saturating_sub(1));
    }
}

/// Human-readable description of a remote failure.
pub fn describe(err: &ApiError) -> String {
    match err {
        ApiError::Transport(reason) | ApiError::Decode(reason) => {
            format!("Could not reach the product service: {reason}")
        }
        ApiError::Rejected { status, body } if body.is_empty() => {
            format!("The server responded with status {status}")
        }
        ApiError::Rejected { status, body } => {
            format!("The server responded with status {status}: {body}")
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
