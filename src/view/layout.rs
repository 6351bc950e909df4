//! Screen layout.
//!
//! Stacks header, filter bar, body, pagination bar and status bar, and picks
//! the body from the load state: a loading message, the fetch error, the
//! no-results panel, or the results table.

use super::constants::{FILTER_BAR_HEIGHT, HEADER_HEIGHT, PAGINATION_BAR_HEIGHT, STATUS_BAR_HEIGHT};
use super::filter_bar::{input_line, FilterBar};
use super::help::render_help_overlay;
use super::pagination::{pages_line, summary_line};
use super::styles::Theme;
use super::table::results_table;
use crate::state::{AppState, DerivedView, InputField, LoadState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Body title when the filter matched nothing.
pub const NO_RESULTS_TITLE: &str = "No items match your search criteria";
/// Body hint under [`NO_RESULTS_TITLE`].
pub const NO_RESULTS_HINT: &str = "Try adjusting your filters or clear them to see all logs";
/// Body text while a fetch is in flight.
pub const LOADING_TEXT: &str = "Loading logs...";

const KEY_HINTS: &str = "/ search  m message  s/e dates  c clear  t sort  ←/→ page  r reload  ? help  q quit";

/// Render the whole screen for the current state.
pub fn render_layout(frame: &mut Frame, state: &AppState, theme: Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(FILTER_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(PAGINATION_BAR_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    let derived = state.derived();

    render_header(frame, chunks[0], state, theme);
    frame.render_widget(FilterBar::new(state, theme), chunks[1]);

    match &state.load {
        LoadState::Loading => render_loading(frame, chunks[2], theme),
        LoadState::Failed(message) => render_error(frame, chunks[2], message, theme),
        LoadState::Ready if derived.is_empty() => render_no_results(frame, chunks[2], theme),
        LoadState::Ready => {
            frame.render_widget(
                results_table(&derived.rows, state.view().sort, theme),
                chunks[2],
            );
        }
    }

    if state.load == LoadState::Ready && !derived.is_empty() {
        render_pagination(frame, chunks[3], &derived, theme);
    }

    render_status_bar(frame, chunks[4], state, theme);

    if state.help_visible {
        render_help_overlay(frame, theme);
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let mut spans = vec![Span::styled("logsift", theme.title())];

    if !state.source_label.is_empty() {
        spans.push(Span::styled(" │ ", theme.muted()));
        spans.push(Span::raw(state.source_label.clone()));
    }

    if state.load == LoadState::Ready {
        spans.push(Span::styled(" │ ", theme.muted()));
        spans.push(Span::raw(format!("{} records", state.records().len())));
        if state.malformed_count() > 0 {
            spans.push(Span::styled(
                format!(" ({} malformed)", state.malformed_count()),
                theme.notice(),
            ));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_loading(frame: &mut Frame, area: Rect, theme: Theme) {
    let paragraph = Paragraph::new(Line::from(Span::styled(LOADING_TEXT, theme.muted())))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_error(frame: &mut Frame, area: Rect, message: &str, theme: Theme) {
    let lines = vec![
        Line::from(Span::styled(message.to_string(), theme.error())),
        Line::default(),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("r", theme.key_hint()),
            Span::raw(" to retry"),
        ]),
    ];
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.error())
                .title(" Error "),
        );
    frame.render_widget(paragraph, area);
}

fn render_no_results(frame: &mut Frame, area: Rect, theme: Theme) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(NO_RESULTS_TITLE, theme.title())),
        Line::from(Span::styled(NO_RESULTS_HINT, theme.muted())),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_pagination(frame: &mut Frame, area: Rect, derived: &DerivedView<'_>, theme: Theme) {
    let lines = vec![
        summary_line(derived, theme),
        pages_line(derived.current_page, derived.total_pages, theme),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Go-to-page prompt while it is open, else the notice, else key hints.
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let line = match (&state.input, &state.notice) {
        (Some(buffer), notice) if buffer.field == InputField::GoToPage => {
            let prompt = "Go to page: ";
            let mut spans = vec![Span::styled(prompt, theme.key_hint())];
            let width = (area.width as usize).saturating_sub(prompt.len());
            spans.extend(input_line(buffer, width, theme).spans);
            if let Some(notice) = notice {
                spans.push(Span::styled(format!("  {notice}"), theme.notice()));
            }
            Line::from(spans)
        }
        (_, Some(notice)) => Line::from(Span::styled(notice.clone(), theme.notice())),
        (Some(_), None) => Line::from(Span::styled(
            "Enter apply  Esc close  ←/→ move cursor",
            theme.muted(),
        )),
        (None, None) => Line::from(Span::styled(KEY_HINTS, theme.muted())),
    };

    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
