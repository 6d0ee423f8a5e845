//! Small rendering helpers shared by widgets.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` to at most `max_width` display columns, ending in `…` when cut.
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Rect centered in `area`, sized as a percentage of its width and an absolute height.
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = (area.width * percent_x / 100).max(20).min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// `key  description` line used by the help overlay and status bar.
pub fn key_hint_line(key: &str, description: &str, key_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<12}"), key_style),
        Span::raw(description.to_string()),
    ])
}

/// Blank line.
pub fn empty_line() -> Line<'static> {
    Line::from("")
}
