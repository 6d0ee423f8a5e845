//! Tests for AppState transitions.

use super::*;
use crate::model::{Category, ProductId, ProductPatch, ProductPayload};
use crate::state::FormField;
use crate::view_state::{PageSize, SortKey, SortSpec};
use crossterm::event::KeyModifiers;
use std::path::PathBuf;

// ===== Test Helpers =====

fn product(id: i64, title: &str, price: f64) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_string(),
        price,
        description: format!("{title} description"),
        category: Some(Category {
            id: 3,
            name: "Clothes".to_string(),
        }),
        images: vec!["https://img.example/a.png".to_string()],
    }
}

fn numbered(count: usize) -> Vec<Product> {
    (1..=count as i64)
        .map(|i| product(i, &format!("Item {i}"), i as f64))
        .collect()
}

fn state_with(products: Vec<Product>) -> AppState {
    let mut state = AppState::new(ViewStateEngine::new());
    state.apply_outcome(RequestOutcome::Fetched(Ok(products)));
    state
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(state: &mut AppState, code: KeyCode) -> Command {
    state.handle_key(key(code), &KeyBindings::default())
}

fn type_str(state: &mut AppState, text: &str) {
    for ch in text.chars() {
        press(state, KeyCode::Char(ch));
    }
}

fn visible_ids(state: &AppState) -> Vec<i64> {
    state
        .engine()
        .visible_slice()
        .iter()
        .map(|p| p.id.get())
        .collect()
}

fn notice(state: &AppState) -> &Notice {
    match &state.mode {
        Mode::Notice { notice, .. } => notice,
        other => panic!("Expected notice, got {:?}", other),
    }
}

fn rejected() -> ApiError {
    ApiError::Rejected {
        status: 400,
        body: r#"{"message":"bad"}"#.to_string(),
    }
}

// ===== Loading =====

#[test]
fn reload_sets_loading_and_requests_fetch() {
    let mut state = AppState::new(ViewStateEngine::new());
    assert_eq!(
        press(&mut state, KeyCode::Char('r')),
        Command::Submit(Request::FetchAll)
    );
    assert!(state.is_loading());
}

#[test]
fn fetched_products_replace_cache_and_stamp_time() {
    let mut state = AppState::new(ViewStateEngine::new());
    state.request_reload();
    state.apply_outcome(RequestOutcome::Fetched(Ok(numbered(3))));

    assert!(!state.is_loading());
    assert!(state.last_loaded().is_some());
    assert_eq!(visible_ids(&state), vec![1, 2, 3]);
    assert_eq!(state.mode, Mode::Browsing);
}

#[test]
fn failed_fetch_keeps_cache_and_shows_error() {
    let mut state = state_with(numbered(2));
    state.request_reload();
    state.apply_outcome(RequestOutcome::Fetched(Err(ApiError::Transport(
        "connection refused".to_string(),
    ))));

    assert!(!state.is_loading());
    assert_eq!(visible_ids(&state), vec![1, 2]);
    let shown = notice(&state);
    assert_eq!(shown.kind, NoticeKind::Error);
    assert!(shown.message.contains("connection refused"));
}

// ===== Selection & paging =====

#[test]
fn selection_stays_within_page() {
    let mut state = state_with(numbered(7));
    for _ in 0..10 {
        press(&mut state, KeyCode::Char('j'));
    }
    assert_eq!(state.selected(), 4);

    press(&mut state, KeyCode::Char('k'));
    assert_eq!(state.selected_product().map(|p| p.id.get()), Some(4));
}

#[test]
fn paging_resets_selection() {
    let mut state = state_with(numbered(12));
    press(&mut state, KeyCode::Char('j'));
    press(&mut state, KeyCode::Char('n'));

    assert_eq!(state.engine().view().current_page, 2);
    assert_eq!(state.selected(), 0);
    assert_eq!(visible_ids(&state), vec![6, 7, 8, 9, 10]);
}

#[test]
fn last_and_first_page_jump() {
    let mut state = state_with(numbered(12));
    state.handle_action(KeyAction::LastPage);
    assert_eq!(visible_ids(&state), vec![11, 12]);

    state.handle_action(KeyAction::FirstPage);
    assert_eq!(state.engine().view().current_page, 1);
}

#[test]
fn cycling_page_size_goes_back_to_first_page() {
    let mut state = state_with(numbered(30));
    press(&mut state, KeyCode::Char('n'));
    press(&mut state, KeyCode::Char('z'));

    assert_eq!(state.engine().view().page_size, PageSize::new(10).unwrap());
    assert_eq!(state.engine().view().current_page, 1);
}

#[test]
fn sort_key_toggles_direction() {
    let mut state = state_with(vec![product(1, "Shoe", 10.0), product(2, "Hat", 5.0)]);
    press(&mut state, KeyCode::Char('3'));
    assert_eq!(
        state.engine().view().sort,
        Some(SortSpec::ascending(SortKey::Price))
    );
    assert_eq!(visible_ids(&state), vec![2, 1]);

    press(&mut state, KeyCode::Char('3'));
    assert_eq!(visible_ids(&state), vec![1, 2]);
}

// ===== Search =====

#[test]
fn typing_in_search_filters_live() {
    let mut state = state_with(vec![product(1, "Shoe", 10.0), product(2, "Hat", 5.0)]);
    press(&mut state, KeyCode::Char('/'));
    assert!(matches!(state.mode, Mode::Searching(_)));

    type_str(&mut state, "sh");
    assert_eq!(state.engine().view().search_query, "sh");
    assert_eq!(visible_ids(&state), vec![1]);

    // Letters bound in browsing mode are text while searching.
    type_str(&mut state, "q");
    assert!(matches!(state.mode, Mode::Searching(_)));

    press(&mut state, KeyCode::Enter);
    assert_eq!(state.mode, Mode::Browsing);
    assert_eq!(state.engine().view().search_query, "shq");
}

#[test]
fn escape_in_search_clears_query() {
    let mut state = state_with(vec![product(1, "Shoe", 10.0), product(2, "Hat", 5.0)]);
    press(&mut state, KeyCode::Char('/'));
    type_str(&mut state, "hat");
    press(&mut state, KeyCode::Esc);

    assert_eq!(state.mode, Mode::Browsing);
    assert_eq!(state.engine().view().search_query, "");
    assert_eq!(visible_ids(&state), vec![1, 2]);
}

#[test]
fn reopening_search_keeps_existing_query() {
    let mut state = state_with(numbered(3));
    press(&mut state, KeyCode::Char('/'));
    type_str(&mut state, "item");
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Char('/'));

    match &state.mode {
        Mode::Searching(input) => {
            assert_eq!(input.value(), "item");
            assert_eq!(input.cursor(), 4);
        }
        other => panic!("Expected search mode, got {:?}", other),
    }
}

// ===== Forms =====

#[test]
fn empty_create_form_sends_nothing() {
    let mut state = state_with(numbered(2));
    press(&mut state, KeyCode::Char('c'));
    assert!(matches!(state.mode, Mode::Form(_)));

    let command = press(&mut state, KeyCode::Enter);
    assert_eq!(command, Command::None);
    assert_eq!(notice(&state).message, "Title is required");

    // Dismissing the notice returns to the form.
    press(&mut state, KeyCode::Enter);
    assert!(matches!(state.mode, Mode::Form(_)));
}

#[test]
fn valid_create_form_submits_request() {
    let mut state = state_with(numbered(2));
    press(&mut state, KeyCode::Char('c'));
    type_str(&mut state, "Hat");
    press(&mut state, KeyCode::Tab);
    type_str(&mut state, "12.5");
    press(&mut state, KeyCode::Tab);
    type_str(&mut state, "Warm");

    let command = press(&mut state, KeyCode::Enter);
    assert_eq!(
        command,
        Command::Submit(Request::Create(ProductPayload {
            title: "Hat".to_string(),
            price: 12.5,
            description: "Warm".to_string(),
            category_id: 1,
            images: Vec::new(),
        }))
    );
    assert_eq!(state.mode, Mode::Browsing);
}

#[test]
fn edit_submits_cached_images_and_category() {
    let mut state = state_with(numbered(3));
    press(&mut state, KeyCode::Char('j'));
    press(&mut state, KeyCode::Enter);

    match &state.mode {
        Mode::Form(form) => assert_eq!(form.value(FormField::Title), "Item 2"),
        other => panic!("Expected edit form, got {:?}", other),
    }

    type_str(&mut state, "!");
    match press(&mut state, KeyCode::Enter) {
        Command::Submit(Request::Update { id, payload }) => {
            assert_eq!(id, ProductId::new(2));
            assert_eq!(payload.title, "Item 2!");
            assert_eq!(payload.category_id, 3);
            assert_eq!(payload.images, vec!["https://img.example/a.png"]);
        }
        other => panic!("Expected update request, got {:?}", other),
    }
}

#[test]
fn escape_closes_form_without_request() {
    let mut state = state_with(numbered(1));
    press(&mut state, KeyCode::Char('c'));
    assert_eq!(press(&mut state, KeyCode::Esc), Command::None);
    assert_eq!(state.mode, Mode::Browsing);
}

#[test]
fn edit_on_empty_page_does_nothing() {
    let mut state = AppState::new(ViewStateEngine::new());
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.mode, Mode::Browsing);
}

// ===== Outcomes =====

#[test]
fn created_product_is_prepended_and_announced() {
    let mut state = state_with(numbered(2));
    state.apply_outcome(RequestOutcome::Created(Ok(product(99, "New", 1.0))));

    assert_eq!(visible_ids(&state), vec![99, 1, 2]);
    assert_eq!(notice(&state).title, "Product created");
}

#[test]
fn failed_create_leaves_cache_untouched() {
    let mut state = state_with(numbered(2));
    state.apply_outcome(RequestOutcome::Created(Err(rejected())));

    assert_eq!(visible_ids(&state), vec![1, 2]);
    let shown = notice(&state);
    assert_eq!(shown.kind, NoticeKind::Error);
    assert!(shown.message.contains("400"));
    assert!(shown.message.contains("bad"));
}

#[test]
fn update_merges_patch() {
    let mut state = state_with(numbered(2));
    state.apply_outcome(RequestOutcome::Updated {
        id: ProductId::new(2),
        result: Ok(ProductPatch {
            title: Some("Renamed".to_string()),
            ..ProductPatch::default()
        }),
    });

    let updated = state.engine().get(ProductId::new(2)).unwrap();
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.images, vec!["https://img.example/a.png"]);
    assert_eq!(notice(&state).kind, NoticeKind::Info);
}

#[test]
fn failed_update_reports_id() {
    let mut state = state_with(numbered(2));
    state.apply_outcome(RequestOutcome::Updated {
        id: ProductId::new(2),
        result: Err(rejected()),
    });

    assert_eq!(notice(&state).title, "Failed to update product #2");
    assert_eq!(state.engine().get(ProductId::new(2)).unwrap().title, "Item 2");
}

#[test]
fn notice_stacks_over_search_and_restores_it() {
    let mut state = state_with(numbered(2));
    press(&mut state, KeyCode::Char('/'));
    state.apply_outcome(RequestOutcome::Created(Err(rejected())));

    // Other keys don't dismiss.
    press(&mut state, KeyCode::Char('x'));
    assert!(matches!(state.mode, Mode::Notice { .. }));

    press(&mut state, KeyCode::Esc);
    assert!(matches!(state.mode, Mode::Searching(_)));
}

// ===== Export =====

#[test]
fn export_key_returns_export_command() {
    let mut state = state_with(numbered(1));
    assert_eq!(press(&mut state, KeyCode::Char('e')), Command::Export);
}

#[test]
fn export_results_are_reported() {
    let path = PathBuf::from("out.csv");
    let mut state = state_with(numbered(1));

    state.record_export(Ok(4), &path);
    assert_eq!(notice(&state).message, "Exported 4 products to out.csv");

    press(&mut state, KeyCode::Enter);
    state.record_export(Err(ExportError::NothingToExport), &path);
    assert_eq!(notice(&state).message, "Nothing to export");
}

// ===== Help & quit =====

#[test]
fn help_toggles_with_question_mark() {
    let mut state = state_with(numbered(1));
    press(&mut state, KeyCode::Char('?'));
    assert_eq!(state.mode, Mode::Help);

    press(&mut state, KeyCode::Char('j'));
    assert_eq!(state.mode, Mode::Help);

    press(&mut state, KeyCode::Char('?'));
    assert_eq!(state.mode, Mode::Browsing);
}

#[test]
fn q_and_ctrl_c_quit() {
    let mut state = state_with(numbered(1));
    assert_eq!(press(&mut state, KeyCode::Char('q')), Command::Quit);

    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(
        state.handle_key(ctrl_c, &KeyBindings::default()),
        Command::Quit
    );
}

#[test]
fn describe_distinguishes_transport_and_rejection() {
    assert!(describe(&ApiError::Transport("timeout".into())).starts_with("Could not reach"));
    assert_eq!(
        describe(&ApiError::Rejected {
            status: 500,
            body: String::new()
        }),
        "The server responded with status 500"
    );
}
