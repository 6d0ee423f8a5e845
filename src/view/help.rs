//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::helpers::{centered_rect, empty_line, key_hint_line};
use super::styles::Styles;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Table",
        &[
            ("j/↓  k/↑", "Select row"),
            ("n/→  p/←", "Next / previous page"),
            ("g  G", "First / last page"),
            ("z", "Rows per page (5, 10, 20)"),
            ("1-5", "Sort by ID, title, price, category, description"),
        ],
    ),
    (
        "Search",
        &[
            ("/", "Search by title"),
            ("Enter", "Keep query and return to table"),
            ("Esc", "Clear search"),
        ],
    ),
    (
        "Products",
        &[
            ("Enter", "Edit selected product"),
            ("c", "Create product"),
            ("e", "Export filtered products to CSV"),
            ("r", "Reload from server"),
        ],
    ),
    (
        "Application",
        &[("?", "Toggle this help"), ("q  Ctrl+C", "Quit")],
    ),
];

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, styles: &Styles) {
    let area = frame.area();
    let height = area.height * HELP_POPUP_HEIGHT_PERCENT / 100;
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, height, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(styles))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(styles.focused_border),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        styles.muted,
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

fn build_help_content(styles: &Styles) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, (title, keys)) in SECTIONS.iter().enumerate() {
        if i > 0 {
            lines.push(empty_line());
        }
        lines.push(Line::from(Span::styled(*title, styles.header)));
        for (key, description) in keys.iter() {
            lines.push(key_hint_line(key, description, styles.key_hint));
        }
    }
    lines
}
