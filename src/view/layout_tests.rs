//! Tests for screen layout rendering.

use super::*;
use crate::model::FetchError;
use crate::parser::parse_lines;
use crate::state::{PageIntent, PageSize};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

// ===== Test Helpers =====

fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        result.push('\n');
    }
    result
}

fn render(state: &AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
    terminal
        .draw(|frame| render_layout(frame, state, Theme::default()))
        .unwrap();
    buffer_to_string(terminal.backend().buffer())
}

fn ready_state(count: usize) -> AppState {
    let mut state = AppState::new(PageSize::new(5).unwrap());
    state.source_label = "http://127.0.0.1:3000/api/logs".to_string();
    state.apply_fetch_result(Ok(parse_lines(
        (1..=count)
            .map(|i| format!("2024-01-01T10:{i:02}|=|low|=|info|=|trace-{i}|=|author-{i}"))
            .collect(),
    )));
    state
}

// ===== Body states =====

#[test]
fn loading_state_shows_loading_text() {
    let state = AppState::new(PageSize::default());
    let text = render(&state);
    assert!(text.contains(LOADING_TEXT));
    assert!(!text.contains("Showing"));
}

#[test]
fn failed_state_shows_error_and_retry_hint() {
    let mut state = AppState::new(PageSize::default());
    state.apply_fetch_result(Err(FetchError::Status {
        status: "Internal Server Error".to_string(),
    }));

    let text = render(&state);

    assert!(text.contains("Failed to fetch logs: Internal Server Error"), "{text}");
    assert!(text.contains("to retry"));
    assert!(!text.contains("Showing"));
}

#[test]
fn empty_filter_result_shows_no_results_panel() {
    let mut state = ready_state(3);
    state.set_search("nothing matches this");

    let text = render(&state);

    assert!(text.contains(NO_RESULTS_TITLE));
    assert!(text.contains(NO_RESULTS_HINT));
    assert!(!text.contains("Showing"));
}

#[test]
fn ready_state_shows_table_and_pagination() {
    let mut state = ready_state(12);
    state.page(PageIntent::Last);

    let text = render(&state);

    assert!(text.contains("Timestamp ⋮"), "{text}");
    assert!(text.contains("trace-11"));
    assert!(text.contains("trace-12"));
    assert!(!text.contains("trace-10"));
    assert!(text.contains("Showing 11 - 12 of 12"));
    assert!(text.contains("Page 3 of 3"));
}

// ===== Header and status =====

#[test]
fn header_shows_source_and_counts() {
    let mut state = ready_state(2);
    state.apply_fetch_result(Ok(parse_lines(vec![
        "2024-01-01T10:00|=|low|=|info|=|ok|=|a".to_string(),
        "only|=|three|=|fields".to_string(),
    ])));

    let text = render(&state);
    let header = text.lines().next().unwrap_or_default();

    assert!(header.contains("logsift"));
    assert!(header.contains("2 records"));
    assert!(header.contains("(1 malformed)"));
}

#[test]
fn status_bar_shows_notice() {
    let mut state = ready_state(2);
    state.notice = Some("Date 'soon' is in the future".to_string());

    let text = render(&state);
    let status = text.lines().last().unwrap_or_default();

    assert!(status.contains("in the future"));
}

#[test]
fn status_bar_shows_go_to_page_prompt() {
    let mut state = ready_state(12);
    state.begin_input(InputField::GoToPage);

    let text = render(&state);
    let status = text.lines().last().unwrap_or_default();

    assert!(status.contains("Go to page:"));
}

#[test]
fn help_overlay_drawn_when_visible() {
    let mut state = ready_state(2);
    state.help_visible = true;

    let text = render(&state);

    assert!(text.contains("Keyboard Shortcuts"));
}
