//! Footer under the table: result summary, rows-per-page and the pagination bar.

use super::styles::Styles;
use crate::view_state::{PageItem, ViewStateEngine};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Build the `‹ Prev 1 … 4 [5] 6 … 20 Next ›` line.
///
/// Empty when there is at most one page.
pub fn pagination_line(
    current: usize,
    window: &[PageItem],
    has_prev: bool,
    has_next: bool,
    styles: &Styles,
) -> Line<'static> {
    if window.is_empty() {
        return Line::default();
    }

    let edge = |label: &'static str, enabled: bool| {
        if enabled {
            Span::styled(label, styles.key_hint)
        } else {
            Span::styled(label, styles.muted)
        }
    };

    let mut spans = vec![edge("‹ Prev", has_prev), Span::raw(" ")];
    for item in window {
        match *item {
            PageItem::Page(page) if page == current => {
                spans.push(Span::styled(format!("[{page}]"), styles.current_page));
            }
            PageItem::Page(page) => spans.push(Span::raw(format!(" {page} "))),
            PageItem::Ellipsis => spans.push(Span::styled(" … ", styles.muted)),
        }
    }
    spans.push(Span::raw(" "));
    spans.push(edge("Next ›", has_next));
    Line::from(spans)
}

/// Pagination bar with summary and page buttons.
pub struct Footer<'a> {
    engine: &'a ViewStateEngine,
    styles: &'a Styles,
}

impl<'a> Footer<'a> {
    /// Footer for the current engine state.
    pub fn new(engine: &'a ViewStateEngine, styles: &'a Styles) -> Self {
        Self { engine, styles }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [summary_area, pager_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);
        let [summary_left, summary_right] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(20)])
                .areas(summary_area);

        Paragraph::new(self.engine.summary().to_string()).render(summary_left, buf);
        Paragraph::new(Line::from(vec![
            Span::styled("Rows/page: ", self.styles.muted),
            Span::raw(self.engine.view().page_size.to_string()),
        ]))
        .alignment(Alignment::Right)
        .render(summary_right, buf);

        let window = self.engine.page_window();
        Paragraph::new(pagination_line(
            self.engine.view().current_page,
            &window,
            self.engine.has_prev_page(),
            self.engine.has_next_page(),
            self.styles,
        ))
        .alignment(Alignment::Center)
        .render(pager_area, buf);
    }
}
