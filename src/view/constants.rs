//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the page tab bar in lines (border + content).
pub const TAB_BAR_HEIGHT: u16 = 3;

/// Height of the page header: title line plus typing caption line.
pub const HEADER_HEIGHT: u16 = 2;

/// Height of the status bar in lines.
///
/// Single line for keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the search input widget in lines.
///
/// Includes border and text input area.
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the filter chip and sort line plus the result count line.
pub const CONTROLS_HEIGHT: u16 = 2;

/// Width percentage of the list column on list pages.
///
/// The rest of the row is the detail pane.
pub const LIST_WIDTH_PERCENT: u16 = 45;

/// Width percentage for help overlay popup.
///
/// Percentage of screen width (0-100) for the help overlay modal.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
///
/// Percentage of screen height (0-100) for the help overlay modal.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Longest the event loop waits for input when no caption is typing.
pub const IDLE_POLL_MS: u64 = 500;

/// Character shown after a caption while it is still typing.
pub const CAPTION_CURSOR: &str = "▌";

/// Date format for deadlines and filing dates ("Mar 1, 2024").
pub const DATE_FORMAT: &str = "%b %-d, %Y";
