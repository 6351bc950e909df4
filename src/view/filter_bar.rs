//! Filter bar: message selector, search box and the two date inputs.

use super::styles::Theme;
use super::table::display_message;
use crate::state::{AppState, InputBuffer, InputField};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Filter bar widget.
pub struct FilterBar<'a> {
    state: &'a AppState,
    theme: Theme,
}

impl<'a> FilterBar<'a> {
    /// Widget over the current filter state.
    pub fn new(state: &'a AppState, theme: Theme) -> Self {
        Self { state, theme }
    }

    fn editing(&self, field: InputField) -> Option<&'a InputBuffer> {
        let state: &'a AppState = self.state;
        state.input.as_ref().filter(|buffer| buffer.field == field)
    }

    fn input_box(
        &self,
        field: InputField,
        key: char,
        value: &str,
        placeholder: &str,
        width: u16,
    ) -> Paragraph<'a> {
        let title = format!(" {} ({key}) ", field.title());

        let (line, border) = match self.editing(field) {
            Some(buffer) => (
                input_line(buffer, width.saturating_sub(2) as usize, self.theme),
                self.theme.active_border(),
            ),
            None if value.is_empty() => (
                Line::from(Span::styled(placeholder.to_string(), self.theme.muted())),
                Style::default(),
            ),
            None => (Line::from(value.to_string()), Style::default()),
        };

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(title),
        )
    }
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(20),
                Constraint::Percentage(40),
                Constraint::Percentage(20),
                Constraint::Percentage(20),
            ])
            .split(area);

        let criteria = self.state.criteria();

        let message = criteria
            .message
            .as_deref()
            .map(display_message)
            .unwrap_or_else(|| "All Messages".to_string());
        Paragraph::new(Line::from(message))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Message (m/M) "),
            )
            .render(chunks[0], buf);

        let fields = [
            (InputField::Search, '/', criteria.search.clone(), "Search..."),
            (
                InputField::StartDate,
                's',
                criteria.start_date().map(|b| b.text().to_string()).unwrap_or_default(),
                "YYYY-MM-DD",
            ),
            (
                InputField::EndDate,
                'e',
                criteria.end_date().map(|b| b.text().to_string()).unwrap_or_default(),
                "YYYY-MM-DD",
            ),
        ];

        for ((field, key, value, placeholder), area) in fields.into_iter().zip(chunks.iter().skip(1)) {
            self.input_box(field, key, &value, placeholder, area.width)
                .render(*area, buf);
        }
    }
}

/// Render an input buffer with a block cursor, scrolled so the cursor stays
/// inside `width` columns.
pub fn input_line(buffer: &InputBuffer, width: usize, theme: Theme) -> Line<'static> {
    let mut before: String = buffer.text.chars().take(buffer.cursor).collect();
    let mut rest = buffer.text.chars().skip(buffer.cursor);
    let under = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
    let after: String = rest.collect();

    // Drop leading characters until the cursor cell fits.
    let cursor_width = under.width().max(1);
    while !before.is_empty() && before.width() + cursor_width > width {
        before.remove(0);
    }

    Line::from(vec![
        Span::raw(before),
        Span::styled(under, theme.cursor()),
        Span::raw(after),
    ])
}
