//! Single-line text input (pure state transitions).
//!
//! Shared by the search bar and the form fields. The cursor counts characters,
//! not bytes, so multi-byte input edits correctly.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Text being edited plus a cursor position in `0..=char_count`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    /// Input pre-filled with `value`, cursor at the end.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    /// Current text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Take the text out.
    pub fn into_value(self) -> String {
        self.value
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }
}

/// Insert `ch` at the cursor and advance the cursor.
pub fn handle_char_input(mut input: TextInput, ch: char) -> TextInput {
    let at = input.byte_offset(input.cursor);
    input.value.insert(at, ch);
    input.cursor += 1;
    input
}

/// Delete the character before the cursor. No-op at position 0.
pub fn handle_backspace(mut input: TextInput) -> TextInput {
    if input.cursor == 0 {
        return input;
    }
    let at = input.byte_offset(input.cursor - 1);
    input.value.remove(at);
    input.cursor -= 1;
    input
}

/// Delete the character under the cursor. No-op at the end.
pub fn handle_delete(mut input: TextInput) -> TextInput {
    if input.cursor < input.char_count() {
        let at = input.byte_offset(input.cursor);
        input.value.remove(at);
    }
    input
}

/// Move cursor left, saturating at 0.
pub fn handle_cursor_left(mut input: TextInput) -> TextInput {
    input.cursor = input.cursor.saturating_sub(1);
    input
}

/// Move cursor right, saturating at the end.
pub fn handle_cursor_right(mut input: TextInput) -> TextInput {
    input.cursor = (input.cursor + 1).min(input.char_count());
    input
}

/// Apply an editing key. Returns `None` when the key is not an edit,
/// leaving the caller to interpret it (Enter, Esc, Tab, ...).
pub fn handle_edit_key(input: &TextInput, key: KeyEvent) -> Option<TextInput> {
    let input = input.clone();
    match key.code {
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(handle_char_input(input, ch))
        }
        KeyCode::Backspace => Some(handle_backspace(input)),
        KeyCode::Delete => Some(handle_delete(input)),
        KeyCode::Left => Some(handle_cursor_left(input)),
        KeyCode::Right => Some(handle_cursor_right(input)),
        KeyCode::Home => Some(TextInput { cursor: 0, ..input }),
        KeyCode::End => {
            let cursor = input.char_count();
            Some(TextInput { cursor, ..input })
        }
        _ => None,
    }
}
