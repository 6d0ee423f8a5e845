//! Color and emphasis for the admin screen.

use crate::state::NoticeKind;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Whether color output is enabled.
///
/// Resolved from `--no-color`, `NO_COLOR`, or the `no_color` config key
/// before the TUI starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Colors on unless `no_color` is set.
    pub fn new(no_color: bool) -> Self {
        Self { enabled: !no_color }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::new(false)
    }
}

// ===== Styles =====

/// Styles shared by every widget.
///
/// With colors disabled, emphasis falls back to bold/reverse modifiers so the
/// selection and current page stay visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styles {
    /// Column headers and labels.
    pub header: Style,
    /// Highlighted table row.
    pub selected_row: Style,
    /// De-emphasized text.
    pub muted: Style,
    /// Key names in hints.
    pub key_hint: Style,
    /// Current page button.
    pub current_page: Style,
    /// Unfocused block border.
    pub border: Style,
    /// Focused block border.
    pub focused_border: Style,
    /// Text cursor.
    pub cursor: Style,
    /// Info notices.
    pub info: Style,
    /// Error notices.
    pub error: Style,
}

impl Styles {
    /// Styles for the given color setting.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                header: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                selected_row: Style::default().bg(Color::DarkGray).fg(Color::White),
                muted: Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
                key_hint: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                current_page: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                border: Style::default().fg(Color::Gray),
                focused_border: Style::default().fg(Color::Cyan),
                cursor: Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                info: Style::default().fg(Color::Green),
                error: Style::default().fg(Color::Red),
            }
        } else {
            let reversed = Style::default().add_modifier(Modifier::REVERSED);
            Self {
                header: Style::default().add_modifier(Modifier::BOLD),
                selected_row: reversed,
                muted: Style::default(),
                key_hint: Style::default().add_modifier(Modifier::BOLD),
                current_page: reversed,
                border: Style::default(),
                focused_border: Style::default().add_modifier(Modifier::BOLD),
                cursor: reversed,
                info: Style::default(),
                error: Style::default().add_modifier(Modifier::BOLD),
            }
        }
    }

    /// Style for a notice of `kind`.
    pub fn for_notice(&self, kind: NoticeKind) -> Style {
        match kind {
            NoticeKind::Info => self.info,
            NoticeKind::Error => self.error,
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::default())
    }
}

// ===== Tests =====
