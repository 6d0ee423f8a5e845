//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the search bar (border + content).
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the description strip under the table.
pub const DETAIL_BAR_HEIGHT: u16 = 1;

/// Height of the footer: summary line and pagination bar.
pub const FOOTER_HEIGHT: u16 = 2;

/// Height of the status bar in lines.
///
/// Single line for load status and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Fixed column widths of the product table. Title and Image share the rest.
pub const ID_COLUMN_WIDTH: u16 = 6;
/// Width of the price column.
pub const PRICE_COLUMN_WIDTH: u16 = 10;
/// Width of the category column.
pub const CATEGORY_COLUMN_WIDTH: u16 = 14;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Width percentage for the create/edit form.
pub const FORM_POPUP_WIDTH_PERCENT: u16 = 60;

/// Width percentage for notification modals.
pub const NOTICE_POPUP_WIDTH_PERCENT: u16 = 50;
