//! Search input widget for rendering the search bar.

use super::styles::Styles;
use crate::state::TextInput;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// What the search bar shows.
#[derive(Debug, Clone, Copy)]
pub enum SearchDisplay<'a> {
    /// Search has focus: show the input with its cursor.
    Editing(&'a TextInput),
    /// Read-only view of the applied query (may be empty).
    Applied(&'a str),
}

/// Search bar widget. Always visible above the table.
pub struct SearchInput<'a> {
    display: SearchDisplay<'a>,
    styles: &'a Styles,
}

impl<'a> SearchInput<'a> {
    /// Search bar in the given display state.
    pub fn new(display: SearchDisplay<'a>, styles: &'a Styles) -> Self {
        Self { display, styles }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (line, border, title) = match self.display {
            SearchDisplay::Editing(input) => {
                let before: String = input.value().chars().take(input.cursor()).collect();
                let mut after = input.value().chars().skip(input.cursor());
                let cursor_char = after.next().map_or(" ".to_string(), |c| c.to_string());
                let rest: String = after.collect();

                let line = Line::from(vec![
                    Span::raw(before),
                    Span::styled(cursor_char, self.styles.cursor),
                    Span::raw(rest),
                ]);
                (line, self.styles.focused_border, " Search (Enter apply, Esc clear) ")
            }
            SearchDisplay::Applied(query) if query.is_empty() => (
                Line::from(Span::styled("Press / to search by title", self.styles.muted)),
                self.styles.border,
                " Search ",
            ),
            SearchDisplay::Applied(query) => (
                Line::from(query.to_string()),
                self.styles.border,
                " Search ",
            ),
        };

        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(title),
            )
            .render(area, buf);
    }
}
