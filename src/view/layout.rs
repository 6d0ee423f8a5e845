//! Screen layout: search bar, table, description strip, footer, status bar,
//! then any modal on top.

use super::constants::{DETAIL_BAR_HEIGHT, FOOTER_HEIGHT, SEARCH_BAR_HEIGHT, STATUS_BAR_HEIGHT};
use super::detail::DetailStrip;
use super::footer::Footer;
use super::help::render_help_overlay;
use super::modal::{render_form_modal, render_notice_modal};
use super::search_input::{SearchDisplay, SearchInput};
use super::styles::Styles;
use super::table::ProductTable;
use crate::state::{AppState, Mode};
use ratatui::{
    layout::{Constraint, Layout},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the whole screen for `state`.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &Styles) {
    let [search_area, table_area, detail_area, footer_area, status_area] = Layout::vertical([
        Constraint::Length(SEARCH_BAR_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(DETAIL_BAR_HEIGHT),
        Constraint::Length(FOOTER_HEIGHT),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(frame.area());

    let engine = state.engine();

    let display = match active_mode(&state.mode) {
        Mode::Searching(input) => SearchDisplay::Editing(input),
        _ => SearchDisplay::Applied(&engine.view().search_query),
    };
    frame.render_widget(SearchInput::new(display, styles), search_area);

    let rows = engine.visible_slice();
    let table = ProductTable::new(&rows, styles)
        .sort(engine.view().sort)
        .loading(state.is_loading())
        .selected(state.selected());
    frame.render_widget(table, table_area);
    frame.render_widget(DetailStrip::new(state.selected_product(), styles), detail_area);

    frame.render_widget(Footer::new(engine, styles), footer_area);
    frame.render_widget(Paragraph::new(status_line(state, styles)), status_area);

    render_overlay(frame, &state.mode, styles);
}

/// The mode underneath any stacked notices.
fn active_mode(mode: &Mode) -> &Mode {
    match mode {
        Mode::Notice { previous, .. } => active_mode(previous),
        other => other,
    }
}

fn render_overlay(frame: &mut Frame, mode: &Mode, styles: &Styles) {
    match mode {
        Mode::Browsing | Mode::Searching(_) => {}
        Mode::Form(form) => render_form_modal(frame, form, styles),
        Mode::Help => render_help_overlay(frame, styles),
        Mode::Notice { notice, previous } => {
            render_overlay(frame, previous, styles);
            render_notice_modal(frame, notice, styles);
        }
    }
}

fn status_line(state: &AppState, styles: &Styles) -> Line<'static> {
    let status = if state.is_loading() {
        Span::styled("Loading...", styles.key_hint)
    } else {
        match state.last_loaded() {
            Some(at) => Span::styled(format!("Loaded {}", at.format("%H:%M:%S")), styles.muted),
            None => Span::styled("Not loaded", styles.muted),
        }
    };

    let count = state.engine().cache().len();
    Line::from(vec![
        status,
        Span::styled(format!(" · {count} cached · "), styles.muted),
        Span::styled("?", styles.key_hint),
        Span::styled(" help  ", styles.muted),
        Span::styled("q", styles.key_hint),
        Span::styled(" quit", styles.muted),
    ])
}
