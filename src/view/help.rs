//! `?` overlay listing the key bindings.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::Theme;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut groups: (heading, [(keys, description)]).
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Filters",
        &[
            ("m / M", "Next / previous message category"),
            ("/", "Edit search (filters as you type)"),
            ("s", "Edit start date"),
            ("e", "Edit end date"),
            ("c", "Clear all filters"),
        ],
    ),
    (
        "Editing",
        &[
            ("Enter", "Apply"),
            ("Esc", "Close the field"),
            ("← / →", "Move cursor"),
            ("Home / End", "Start / end of text"),
        ],
    ),
    (
        "Sorting",
        &[("t", "Timestamp: unsorted → ascending → descending")],
    ),
    (
        "Pages",
        &[
            ("Home / g", "First page"),
            ("← / h / p", "Previous page"),
            ("→ / l / n", "Next page"),
            ("End / G", "Last page"),
            (":", "Go to page"),
            ("+ / -", "Items per page"),
        ],
    ),
    (
        "Application",
        &[
            ("r", "Reload logs"),
            ("?", "Toggle this help"),
            ("q / Ctrl+C", "Quit"),
        ],
    ),
];

/// Draw the overlay over whatever is already on screen.
pub fn render_help_overlay(frame: &mut Frame, theme: Theme) {
    let area = centered_rect(
        HELP_POPUP_WIDTH_PERCENT,
        HELP_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );

    let block = Block::default()
        .title(" Keyboard Shortcuts ")
        .title_bottom(Line::styled(" Esc or ? closes this help ", theme.muted()).centered())
        .borders(Borders::ALL)
        .border_style(theme.active_border());

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(build_help_content(theme))
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

fn build_help_content(theme: Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, (heading, shortcuts)) in SECTIONS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(*heading, theme.title())));
        for (keys, description) in shortcuts.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<12}"), theme.key_hint()),
                Span::raw(*description),
            ]));
        }
    }
    lines
}
