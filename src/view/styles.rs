//! Color configuration and the styles used across the screen.

use crate::model::MessageCategory;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Whether to emit colors at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Explicit on/off, ignoring the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Colors stay on unless `--no-color` was passed or `NO_COLOR` is set.
    /// An empty `NO_COLOR` counts as set.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Whether colors are on.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

// ===== Theme =====

/// Every style the renderer uses.
///
/// With colors disabled, foreground and background colors are dropped but
/// modifiers (bold, reversed) are kept so the current page and the cursor
/// stay visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    colors: bool,
}

impl Theme {
    /// Theme honouring `config`.
    pub fn new(config: ColorConfig) -> Self {
        Self {
            colors: config.colors_enabled(),
        }
    }

    fn fg(self, color: Color) -> Style {
        if self.colors {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }

    /// Message cell style by category.
    pub fn category(self, category: MessageCategory) -> Style {
        let color = match category {
            MessageCategory::Error => Color::Red,
            MessageCategory::Warn => Color::Yellow,
            MessageCategory::Debug => Color::Blue,
            MessageCategory::Info => Color::Green,
            MessageCategory::Trace | MessageCategory::Other => Color::Gray,
        };
        self.fg(color).add_modifier(Modifier::BOLD)
    }

    /// Header title.
    pub fn title(self) -> Style {
        self.fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    /// Secondary text: placeholders, counts, hints.
    pub fn muted(self) -> Style {
        self.fg(Color::DarkGray)
    }

    /// Column headers.
    pub fn table_header(self) -> Style {
        self.fg(Color::Gray).add_modifier(Modifier::BOLD)
    }

    /// Fetch failures.
    pub fn error(self) -> Style {
        self.fg(Color::Red)
    }

    /// Status-bar notices.
    pub fn notice(self) -> Style {
        self.fg(Color::Yellow)
    }

    /// Key names in the status bar and help.
    pub fn key_hint(self) -> Style {
        self.fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    /// Border of the filter box currently being edited.
    pub fn active_border(self) -> Style {
        self.fg(Color::Cyan)
    }

    /// Highlighted page number. Stays reversed without colors.
    pub fn current_page(self) -> Style {
        self.fg(Color::Cyan).add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    /// Navigation control that would not move.
    pub fn disabled(self) -> Style {
        self.fg(Color::DarkGray).add_modifier(Modifier::DIM)
    }

    /// Block cursor in an input box.
    pub fn cursor(self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ColorConfig::default())
    }
}

// ===== Tests =====
