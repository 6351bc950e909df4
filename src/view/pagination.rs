//! Pagination bar rendering.

use super::styles::Theme;
use crate::state::pagination::{can_go_back, can_go_forward, page_window, PageSummary};
use crate::state::DerivedView;
use ratatui::text::{Line, Span};

/// "Showing a - b of n" plus the page size control.
pub fn summary_line(view: &DerivedView<'_>, theme: Theme) -> Line<'static> {
    let summary = PageSummary::new(view.current_page, view.items_per_page, view.total_items);
    Line::from(vec![
        Span::raw(format!(
            "Showing {} - {} of {}",
            summary.first, summary.last, summary.total
        )),
        Span::styled("   Per page: ", theme.muted()),
        Span::raw(view.items_per_page.to_string()),
        Span::styled(" (+/-)", theme.muted()),
    ])
}

/// Navigation controls and the visible window of page numbers.
///
/// Controls that would not move are dimmed.
pub fn pages_line(current: usize, total: usize, theme: Theme) -> Line<'static> {
    let back = if can_go_back(current) {
        Default::default()
    } else {
        theme.disabled()
    };
    let forward = if can_go_forward(current, total) {
        Default::default()
    } else {
        theme.disabled()
    };

    let mut spans = vec![
        Span::styled("« First", back),
        Span::raw("  "),
        Span::styled("‹ Prev", back),
        Span::raw("  "),
    ];

    for page in page_window(current, total) {
        if page == current {
            spans.push(Span::styled(format!(" {page} "), theme.current_page()));
        } else {
            spans.push(Span::raw(format!(" {page} ")));
        }
    }

    spans.extend([
        Span::raw("  "),
        Span::styled("Next ›", forward),
        Span::raw("  "),
        Span::styled("Last »", forward),
        Span::styled(format!("   Page {current} of {}", total.max(1)), theme.muted()),
    ]);

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LogRecord;
    use crate::state::pipeline::derive;
    use crate::state::{FilterCriteria, PageSize, SortDirection, ViewOptions};

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn summary_for_last_partial_page() {
        let records: Vec<LogRecord> = (0..12)
            .map(|i| LogRecord::new("2024-01-01", "low", "info", format!("{i}"), "a"))
            .collect();
        let view = ViewOptions {
            current_page: 3,
            items_per_page: PageSize::new(5).unwrap(),
            sort: SortDirection::Unsorted,
        };
        let derived = derive(&records, &FilterCriteria::default(), &view);

        insta::assert_snapshot!(text(&summary_line(&derived, Theme::default())), @"Showing 11 - 12 of 12   Per page: 5 (+/-)");
    }

    #[test]
    fn page_window_highlights_current() {
        let line = pages_line(5, 10, Theme::default());
        insta::assert_snapshot!(text(&line), @"« First  ‹ Prev   3  4  5  6  7   Next ›  Last »   Page 5 of 10");

        let current = line
            .spans
            .iter()
            .find(|s| s.content == " 5 ")
            .expect("current page span");
        assert_eq!(current.style, Theme::default().current_page());
    }

    #[test]
    fn navigation_dimmed_at_bounds() {
        let theme = Theme::default();
        let first = pages_line(1, 3, theme);
        assert_eq!(first.spans[0].style, theme.disabled());
        let next = first.spans.iter().find(|s| s.content == "Next ›").unwrap();
        assert_ne!(next.style, theme.disabled());

        let last = pages_line(3, 3, theme);
        let next = last.spans.iter().find(|s| s.content == "Next ›").unwrap();
        assert_eq!(next.style, theme.disabled());
    }

    #[test]
    fn no_pages_shows_no_numbers() {
        let line = pages_line(1, 0, Theme::default());
        insta::assert_snapshot!(text(&line), @"« First  ‹ Prev    Next ›  Last »   Page 1 of 1");
    }
}
