//! Layout dimension constants for TUI rendering.

use std::time::Duration;

/// Height of the header line (title, source, counts).
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the filter bar (bordered input boxes).
pub const FILTER_BAR_HEIGHT: u16 = 3;

/// Height of the pagination bar (summary line and page buttons).
pub const PAGINATION_BAR_HEIGHT: u16 = 2;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// How long the event loop waits for input before redrawing.
pub const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Display format for parseable timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
