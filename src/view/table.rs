//! Product table widget.
//!
//! Renders the visible page: one row per product with ID, Title, Price,
//! Category and a cleaned image URL. The active sort column carries ▲ or ▼.

use super::constants::{CATEGORY_COLUMN_WIDTH, ID_COLUMN_WIDTH, PRICE_COLUMN_WIDTH};
use super::helpers::truncate;
use super::styles::Styles;
use crate::model::Product;
use crate::view_state::{SortKey, SortSpec};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

const NO_IMAGE: &str = "No Image";
const NO_CATEGORY: &str = "-";

/// Column order. Digits 1-4 sort by the first four; description has no column.
const COLUMNS: [(&str, Option<SortKey>); 5] = [
    ("ID", Some(SortKey::Id)),
    ("Title", Some(SortKey::Title)),
    ("Price", Some(SortKey::Price)),
    ("Category", Some(SortKey::Category)),
    ("Image", None),
];

/// Product table for the visible page.
pub struct ProductTable<'a> {
    rows: &'a [&'a Product],
    selected: Option<usize>,
    sort: Option<SortSpec>,
    loading: bool,
    styles: &'a Styles,
}

impl<'a> ProductTable<'a> {
    /// Table over the visible `rows`.
    pub fn new(rows: &'a [&'a Product], styles: &'a Styles) -> Self {
        Self {
            rows,
            selected: None,
            sort: None,
            loading: false,
            styles,
        }
    }

    /// Highlight row `selected` within the page.
    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = Some(selected);
        self
    }

    /// Mark the sorted column header.
    pub fn sort(mut self, sort: Option<SortSpec>) -> Self {
        self.sort = sort;
        self
    }

    /// Show a loading placeholder when there are no rows.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    fn header_label(&self, label: &str, key: Option<SortKey>) -> String {
        match (self.sort, key) {
            (Some(spec), Some(key)) if spec.key == key => {
                let arrow = if spec.ascending { '▲' } else { '▼' };
                format!("{label} {arrow}")
            }
            _ => label.to_string(),
        }
    }

    fn title(&self) -> String {
        match self.sort {
            Some(spec) if spec.key == SortKey::Description => {
                let arrow = if spec.ascending { '▲' } else { '▼' };
                format!(" Products (by description {arrow}) ")
            }
            _ => " Products ".to_string(),
        }
    }
}

/// Price with two decimals, as shown in the table.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

impl Widget for ProductTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.styles.border)
            .title(self.title());

        if self.rows.is_empty() {
            let message = if self.loading {
                "Loading products..."
            } else {
                "No products found"
            };
            Paragraph::new(Span::styled(message, self.styles.muted))
                .block(block)
                .render(area, buf);
            return;
        }

        // Title and Image split what the fixed columns leave over.
        let fixed = ID_COLUMN_WIDTH + PRICE_COLUMN_WIDTH + CATEGORY_COLUMN_WIDTH;
        let flexible = area.width.saturating_sub(fixed + 2 + 4);
        let title_width = flexible * 3 / 5;
        let image_width = flexible - title_width;

        let header = Row::new(
            COLUMNS
                .iter()
                .map(|(label, key)| Cell::from(self.header_label(label, *key))),
        )
        .style(self.styles.header);

        let rows = self.rows.iter().map(|product| {
            let image = product
                .thumbnail_url()
                .map_or(NO_IMAGE.to_string(), |url| truncate(&url, image_width as usize));
            Row::new(vec![
                Cell::from(product.id.to_string()),
                Cell::from(truncate(&product.title, title_width as usize)),
                Cell::from(format_price(product.price)),
                Cell::from(truncate(
                    product.category_name().unwrap_or(NO_CATEGORY),
                    CATEGORY_COLUMN_WIDTH as usize,
                )),
                Cell::from(image),
            ])
        });

        let widths = [
            Constraint::Length(ID_COLUMN_WIDTH),
            Constraint::Length(title_width),
            Constraint::Length(PRICE_COLUMN_WIDTH),
            Constraint::Length(CATEGORY_COLUMN_WIDTH),
            Constraint::Min(image_width),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(self.styles.selected_row);

        let mut state = TableState::default().with_selected(self.selected);
        StatefulWidget::render(table, area, buf, &mut state);
    }
}
