//! One-line strip under the table showing the selected product's description.

use super::helpers::truncate;
use super::styles::Styles;
use crate::model::Product;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const LABEL: &str = " Description: ";

/// Description of the highlighted row, or nothing when no row is shown.
pub struct DetailStrip<'a> {
    product: Option<&'a Product>,
    styles: &'a Styles,
}

impl<'a> DetailStrip<'a> {
    /// Strip for `product`, usually `AppState::selected_product`.
    pub fn new(product: Option<&'a Product>, styles: &'a Styles) -> Self {
        Self { product, styles }
    }
}

impl Widget for DetailStrip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(product) = self.product else {
            return;
        };

        let budget = (area.width as usize).saturating_sub(LABEL.len());
        let text = if product.description.trim().is_empty() {
            Span::styled("(none)", self.styles.muted)
        } else {
            Span::raw(truncate(product.description.trim(), budget))
        };

        Paragraph::new(Line::from(vec![
            Span::styled(LABEL, self.styles.header),
            text,
        ]))
        .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_harness::{buffer_to_string, sample_product};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(width: u16, product: Option<&Product>) -> String {
        let styles = Styles::default();
        let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
        terminal
            .draw(|frame| frame.render_widget(DetailStrip::new(product, &styles), frame.area()))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn shows_description_of_product() {
        let shoe = sample_product(1, "Shoe", 10.0);
        assert_eq!(draw(60, Some(&shoe)), " Description: Shoe description");
    }

    #[test]
    fn long_description_is_truncated_to_width() {
        let mut shoe = sample_product(1, "Shoe", 10.0);
        shoe.description = "Lightweight running shoe with a breathable mesh upper".to_string();

        let out = draw(30, Some(&shoe));
        assert!(out.starts_with(" Description: Lightweight"), "{out}");
        assert!(out.ends_with('…'), "{out}");
    }

    #[test]
    fn blank_description_shows_placeholder() {
        let mut shoe = sample_product(1, "Shoe", 10.0);
        shoe.description = "   ".to_string();
        assert!(draw(40, Some(&shoe)).contains("(none)"));
    }

    #[test]
    fn nothing_selected_renders_empty() {
        assert_eq!(draw(40, None), "");
    }
}
