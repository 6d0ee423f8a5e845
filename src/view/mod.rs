//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod detail;
mod footer;
mod help;
mod helpers;
mod layout;
mod modal;
mod search_input;
mod styles;
mod table;

pub use detail::DetailStrip;
pub use footer::{pagination_line, Footer};
pub use help::render_help_overlay;
pub use helpers::truncate;
pub use search_input::{SearchDisplay, SearchInput};
pub use styles::{ColorConfig, Styles};
pub use table::{format_price, ProductTable};

use crate::api::{ProductSource, RequestWorker};
use crate::config::KeyBindings;
use crate::export::write_csv;
use crate::state::{AppState, Command, Notice};
use crate::view_state::{PageSize, SortSpec, ViewStateEngine};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Initial view and output settings for a TUI session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StartupOptions {
    /// Rows per page.
    pub page_size: PageSize,
    /// Initial title search.
    pub search: Option<String>,
    /// Initial sort column and direction.
    pub sort: Option<SortSpec>,
    /// Destination for CSV export.
    pub export_path: PathBuf,
    /// Disable colors.
    pub no_color: bool,
}

impl StartupOptions {
    /// Engine configured with the initial page size, search and sort.
    pub fn engine(&self) -> ViewStateEngine {
        let mut engine = ViewStateEngine::with_page_size(self.page_size);
        if let Some(query) = &self.search {
            engine.set_search(query.as_str());
        }
        engine.set_sort(self.sort);
        engine
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    worker: RequestWorker,
    key_bindings: KeyBindings,
    styles: Styles,
    export_path: PathBuf,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(worker: RequestWorker, options: &StartupOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state: AppState::new(options.engine()),
            worker,
            key_bindings: KeyBindings::default(),
            styles: Styles::with_color_config(ColorConfig::new(options.no_color)),
            export_path: options.export_path.clone(),
        })
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Run the main event loop
    ///
    /// Returns when the user quits. Between key presses the loop wakes every
    /// tick to pick up finished requests.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const TICK: Duration = Duration::from_millis(100);

        let initial = self.app_state.request_reload();
        self.execute(initial);
        self.draw()?;

        loop {
            if event::poll(TICK)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                        continue;
                    }
                    Event::Resize(_, _) => {
                        self.draw()?;
                        continue;
                    }
                    _ => {}
                }
            }

            if self.drain_outcomes() {
                self.draw()?;
            }
        }
    }

    /// Handle a key press. Returns true if the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let command = self.app_state.handle_key(key, &self.key_bindings);
        self.execute(command)
    }

    /// Carry out a command. Returns true on quit.
    fn execute(&mut self, command: Command) -> bool {
        match command {
            Command::None => false,
            Command::Submit(request) => {
                if !self.worker.submit(request) {
                    self.app_state.notify(Notice::error(
                        "Request not sent",
                        "The background request worker has stopped",
                    ));
                }
                false
            }
            Command::Export => {
                let result = write_csv(&self.export_path, self.app_state.engine().derived());
                if let Err(err) = &result {
                    debug!(error = %err, "Export did not write a file");
                }
                self.app_state.record_export(result, &self.export_path);
                false
            }
            Command::Quit => {
                info!("Quit requested");
                true
            }
        }
    }

    /// Apply every finished request. Returns whether anything changed.
    fn drain_outcomes(&mut self) -> bool {
        let outcomes = self.worker.poll();
        let changed = !outcomes.is_empty();
        for outcome in outcomes {
            self.app_state.apply_outcome(outcome);
        }
        changed
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal
            .draw(|frame| layout::render_layout(frame, state, styles))?;
        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
#[allow(dead_code)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    ///
    /// Skips terminal initialization so a `TestBackend` can be used.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        worker: RequestWorker,
        key_bindings: KeyBindings,
        export_path: PathBuf,
    ) -> Self {
        Self {
            terminal,
            app_state,
            worker,
            key_bindings,
            styles: Styles::default(),
            export_path,
        }
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    pub(crate) fn execute_test(&mut self, command: Command) -> bool {
        self.execute(command)
    }

    /// Block until every in-flight request has finished, or `timeout` passes per request.
    pub(crate) fn settle(&mut self, timeout: Duration) {
        while self.worker.is_busy() {
            match self.worker.wait(timeout) {
                Some(outcome) => self.app_state.apply_outcome(outcome),
                None => break,
            }
        }
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI application against `source`
///
/// Handles terminal setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source<S>(source: S, options: StartupOptions) -> Result<(), TuiError>
where
    S: ProductSource + Send + 'static,
{
    let worker = RequestWorker::spawn(source);
    let mut app = TuiApp::new(worker, &options)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    if let Err(err) = restore_terminal() {
        error!(error = %err, "Failed to restore terminal");
        return Err(err);
    }

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
