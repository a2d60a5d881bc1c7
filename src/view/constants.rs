//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Title line plus the "Browse and filter" subtitle.
pub const HEADER_HEIGHT: u16 = 2;

/// Height of the search box (border + text line).
pub const SEARCH_BOX_HEIGHT: u16 = 3;

/// Filter choices line plus sort line.
pub const CONTROLS_HEIGHT: u16 = 2;

/// "Showing N of M companies" line.
pub const RESULT_COUNT_HEIGHT: u16 = 1;

/// "Page X of Y" line.
pub const PAGINATION_HEIGHT: u16 = 1;

/// Copyright line and key hints.
pub const FOOTER_HEIGHT: u16 = 1;

/// Cards per row in the card grid.
pub const CARD_COLUMNS: usize = 3;

/// Preferred height of one card: borders plus badge, description and three facts.
///
/// Cards shrink toward [`MIN_CARD_HEIGHT`] when the grid does not fit.
pub const CARD_HEIGHT: u16 = 7;

/// Borders plus the industry badge line.
pub const MIN_CARD_HEIGHT: u16 = 3;

/// Table borders, header row and the margin under it.
pub const TABLE_CHROME_HEIGHT: u16 = 4;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Width percentage for the loading and error panels.
pub const MESSAGE_PANEL_WIDTH_PERCENT: u16 = 60;

/// Fixed height of the loading and error panels.
pub const MESSAGE_PANEL_HEIGHT: u16 = 9;
