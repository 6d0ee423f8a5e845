//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crate::view_state::SortKey;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions while browsing the table.
///
/// Text inputs (search box, forms) consume keys before bindings are consulted.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();

        // Row selection
        bindings.insert(
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE),
            KeyAction::SelectDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE),
            KeyAction::SelectUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            KeyAction::SelectDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            KeyAction::SelectUp,
        );

        // Pagination
        bindings.insert(
            KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE),
            KeyAction::NextPage,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            KeyAction::NextPage,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE),
            KeyAction::NextPage,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE),
            KeyAction::PrevPage,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
            KeyAction::PrevPage,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE),
            KeyAction::PrevPage,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            KeyAction::FirstPage,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Home, KeyModifiers::NONE),
            KeyAction::FirstPage,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
            KeyAction::LastPage,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::End, KeyModifiers::NONE),
            KeyAction::LastPage,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE),
            KeyAction::CyclePageSize,
        );

        // Sorting: 1-5 follow the column order
        for (digit, key) in ('1'..='5').zip(SortKey::ALL) {
            bindings.insert(
                KeyEvent::new(KeyCode::Char(digit), KeyModifiers::NONE),
                KeyAction::SortBy(key),
            );
        }

        // Search
        bindings.insert(
            KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE),
            KeyAction::StartSearch,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL),
            KeyAction::StartSearch,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyAction::ClearSearch,
        );

        // Records
        bindings.insert(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            KeyAction::EditSelected,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE),
            KeyAction::CreateProduct,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE),
            KeyAction::Export,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE),
            KeyAction::Reload,
        );

        // Application controls
        bindings.insert(
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE),
            KeyAction::ToggleHelp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Quit,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );

        Self { bindings }
    }
}
