//! Modal overlays: the create/edit form and blocking notices.

use super::constants::{FORM_POPUP_WIDTH_PERCENT, NOTICE_POPUP_WIDTH_PERCENT};
use super::helpers::{centered_rect, empty_line};
use super::styles::Styles;
use crate::state::{FormState, Notice};
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the form centered over the screen.
///
/// One line per field; the focused field shows a cursor.
pub fn render_form_modal(frame: &mut Frame, form: &FormState, styles: &Styles) {
    let field_count = form.fields().count() as u16;
    // fields + blank + hint + borders
    let height = field_count + 4;
    let area = centered_rect(FORM_POPUP_WIDTH_PERCENT, height, frame.area());
    frame.render_widget(Clear, area);

    let focused = form.focused_field();
    let mut lines: Vec<Line> = form
        .fields()
        .map(|(field, input)| {
            let marker = if field.is_optional() { "" } else { "*" };
            let label = Span::styled(format!("{:>13}{marker}: ", field.label()), styles.header);
            if field == focused {
                let before: String = input.value().chars().take(input.cursor()).collect();
                let mut after = input.value().chars().skip(input.cursor());
                let at = after.next().map_or(" ".to_string(), |c| c.to_string());
                let rest: String = after.collect();
                Line::from(vec![
                    label,
                    Span::raw(before),
                    Span::styled(at, styles.cursor),
                    Span::raw(rest),
                ])
            } else {
                Line::from(vec![label, Span::raw(input.value().to_string())])
            }
        })
        .collect();
    lines.push(empty_line());
    lines.push(Line::from(Span::styled(
        "Tab next field · Enter save · Esc cancel",
        styles.muted,
    )));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles.focused_border)
            .title(format!(" {} ", form.title())),
    );
    frame.render_widget(paragraph, area);
}

/// Render a notice centered over the screen.
pub fn render_notice_modal(frame: &mut Frame, notice: &Notice, styles: &Styles) {
    let area = frame.area();
    // Rough wrap estimate so long server bodies get room.
    let inner_width = (area.width * NOTICE_POPUP_WIDTH_PERCENT / 100).saturating_sub(4).max(1);
    let text_lines = (notice.message.chars().count() as u16 / inner_width) + 1;
    let popup = centered_rect(NOTICE_POPUP_WIDTH_PERCENT, text_lines + 4, area);
    frame.render_widget(Clear, popup);

    let style = styles.for_notice(notice.kind);
    let paragraph = Paragraph::new(vec![
        Line::from(notice.message.clone()),
        empty_line(),
        Line::from(Span::styled("Press Enter to dismiss", styles.muted)),
    ])
    .wrap(Wrap { trim: true })
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title(Span::styled(format!(" {} ", notice.title), style)),
    );
    frame.render_widget(paragraph, popup);
}
