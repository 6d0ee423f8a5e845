//! Acceptance Test Harness for TUI testing
//!
//! Wraps `TuiApp<TestBackend>` around an in-memory product service so tests
//! can drive the whole screen with key presses and read back the rendered text.

use crate::api::{ProductSource, RequestWorker};
use crate::config::KeyBindings;
use crate::model::{ApiError, Category, Product, ProductId, ProductPatch, ProductPayload};
use crate::state::AppState;
use crate::view::{StartupOptions, TuiApp};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

/// Convert a ratatui buffer to a string representation.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed.
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Build a product with a category and one image.
pub(crate) fn sample_product(id: i64, title: &str, price: f64) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_string(),
        price,
        description: format!("{title} description"),
        category: Some(Category {
            id: 2,
            name: "Shoes".to_string(),
        }),
        images: vec![format!("https://img.example/{id}.png")],
    }
}

#[derive(Debug, Default)]
struct Store {
    products: Vec<Product>,
    next_id: i64,
    fail_writes: Option<ApiError>,
    calls: Vec<String>,
}

/// In-memory product service. Clones share the same store.
#[derive(Debug, Clone, Default)]
pub(crate) struct StubSource {
    store: Arc<Mutex<Store>>,
}

impl StubSource {
    pub(crate) fn with_products(products: Vec<Product>) -> Self {
        let next_id = products.iter().map(|p| p.id.get()).max().unwrap_or(0) + 1;
        Self {
            store: Arc::new(Mutex::new(Store {
                products,
                next_id,
                ..Store::default()
            })),
        }
    }

    /// Make every following create/update fail with `err`.
    pub(crate) fn fail_writes(&self, err: ApiError) {
        self.store.lock().unwrap().fail_writes = Some(err);
    }

    /// Calls received so far, e.g. `["fetch", "create Hat"]`.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.store.lock().unwrap().calls.clone()
    }
}

impl ProductSource for StubSource {
    fn fetch_all(&self) -> Result<Vec<Product>, ApiError> {
        let mut store = self.store.lock().unwrap();
        store.calls.push("fetch".to_string());
        Ok(store.products.clone())
    }

    fn create(&self, payload: &ProductPayload) -> Result<Product, ApiError> {
        let mut store = self.store.lock().unwrap();
        store.calls.push(format!("create {}", payload.title));
        if let Some(err) = store.fail_writes.clone() {
            return Err(err);
        }
        let product = Product {
            id: ProductId::new(store.next_id),
            title: payload.title.clone(),
            price: payload.price,
            description: payload.description.clone(),
            category: Some(Category {
                id: payload.category_id,
                name: String::new(),
            }),
            images: payload.images.clone(),
        };
        store.next_id += 1;
        store.products.insert(0, product.clone());
        Ok(product)
    }

    fn update(&self, id: ProductId, payload: &ProductPayload) -> Result<ProductPatch, ApiError> {
        let mut store = self.store.lock().unwrap();
        store.calls.push(format!("update {id}"));
        if let Some(err) = store.fail_writes.clone() {
            return Err(err);
        }
        // Echo only the edited fields, like the real service often does.
        Ok(ProductPatch {
            id: Some(id),
            title: Some(payload.title.clone()),
            price: Some(payload.price),
            description: Some(payload.description.clone()),
            ..ProductPatch::default()
        })
    }
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub(crate) struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    source: StubSource,
}

impl AcceptanceTestHarness {
    /// Start an app on a 100x24 terminal, loaded from `products`.
    pub(crate) fn with_products(products: Vec<Product>) -> Self {
        Self::with_options(products, StartupOptions::default())
    }

    pub(crate) fn with_options(products: Vec<Product>, options: StartupOptions) -> Self {
        let source = StubSource::with_products(products);
        let worker = RequestWorker::spawn(source.clone());
        let terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        let mut app_state = AppState::new(options.engine());
        // Mirror the startup fetch done by `TuiApp::run`.
        let initial = app_state.request_reload();
        let mut app = TuiApp::new_for_test(
            terminal,
            app_state,
            worker,
            KeyBindings::default(),
            options.export_path.clone(),
        );
        app.execute_test(initial);
        app.settle(SETTLE_TIMEOUT);

        Self { app, source }
    }

    pub(crate) fn source(&self) -> &StubSource {
        &self.source
    }

    pub(crate) fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Press a key. Returns true if the app asked to quit.
    pub(crate) fn press(&mut self, code: KeyCode) -> bool {
        self.press_with(code, KeyModifiers::NONE)
    }

    pub(crate) fn press_with(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let quit = self.app.handle_key_test(KeyEvent::new(code, modifiers));
        self.app.settle(SETTLE_TIMEOUT);
        quit
    }

    pub(crate) fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            let modifiers = if ch.is_ascii_uppercase() {
                KeyModifiers::SHIFT
            } else {
                KeyModifiers::NONE
            };
            self.press_with(KeyCode::Char(ch), modifiers);
        }
    }

    /// Render and return the screen as text.
    pub(crate) fn render(&mut self) -> String {
        self.app.render_test().unwrap();
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// Ids of the rows on the current page.
    pub(crate) fn visible_ids(&self) -> Vec<i64> {
        self.state()
            .engine()
            .visible_slice()
            .iter()
            .map(|p| p.id.get())
            .collect()
    }
}

/// Export path in the temp dir unique to `name`.
pub(crate) fn temp_export_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("prodadmin_{name}_{}.csv", std::process::id()))
}
