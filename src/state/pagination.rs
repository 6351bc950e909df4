//! Pagination control logic (pure).
//!
//! Computes the visible window of page numbers and applies page navigation
//! intents. Rendering lives in `view::pagination`.

use std::ops::RangeInclusive;

/// Number of page buttons shown at once.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// A page navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageIntent {
    /// Page 1.
    First,
    /// One page back.
    Previous,
    /// One page forward.
    Next,
    /// The last page.
    Last,
    /// Jump to a specific 1-based page.
    Jump(usize),
}

/// Contiguous window of page numbers around `current`.
///
/// Centered on `current` when possible, clamped to `[1, total]`, and shifted
/// toward page 1 when it would run past the last page. Empty when there are
/// no pages.
pub fn page_window(current: usize, total: usize) -> RangeInclusive<usize> {
    if total == 0 {
        #[allow(clippy::reversed_empty_ranges)]
        return 1..=0;
    }

    let mut start = current.saturating_sub(MAX_VISIBLE_PAGES / 2).max(1);
    let end = (start + MAX_VISIBLE_PAGES - 1).min(total);

    if end + 1 - start < MAX_VISIBLE_PAGES {
        start = (end + 1).saturating_sub(MAX_VISIBLE_PAGES).max(1);
    }

    start..=end
}

/// Whether First/Previous would move.
pub fn can_go_back(current: usize) -> bool {
    current > 1
}

/// Whether Next/Last would move.
pub fn can_go_forward(current: usize, total: usize) -> bool {
    current < total
}

/// Resulting page after applying `intent`.
///
/// First/Previous are no-ops on page 1, Next/Last are no-ops on the last page,
/// and jumps are clamped to the valid range.
pub fn apply_intent(current: usize, total: usize, intent: PageIntent) -> usize {
    let last = total.max(1);
    match intent {
        PageIntent::First if can_go_back(current) => 1,
        PageIntent::Previous if can_go_back(current) => current - 1,
        PageIntent::Next if can_go_forward(current, total) => current + 1,
        PageIntent::Last if can_go_forward(current, total) => total,
        PageIntent::Jump(page) => page.clamp(1, last),
        _ => current,
    }
}

/// "Showing a - b of n" figures for the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    /// 1-based index of the first row shown, 0 when empty.
    pub first: usize,
    /// 1-based index of the last row shown.
    pub last: usize,
    /// Rows across all pages.
    pub total: usize,
}

impl PageSummary {
    /// Figures for page `current`, clamped to the item count.
    pub fn new(current: usize, items_per_page: usize, total_items: usize) -> Self {
        let offset = current.saturating_sub(1).saturating_mul(items_per_page);
        Self {
            first: (offset + 1).min(total_items),
            last: current.saturating_mul(items_per_page).min(total_items),
            total: total_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(current: usize, total: usize) -> Vec<usize> {
        page_window(current, total).collect()
    }

    #[test]
    fn window_empty_without_pages() {
        assert!(window(1, 0).is_empty());
    }

    #[test]
    fn window_fewer_pages_than_slots() {
        assert_eq!(window(1, 3), vec![1, 2, 3]);
        assert_eq!(window(3, 3), vec![1, 2, 3]);
    }

    #[test]
    fn window_at_start() {
        assert_eq!(window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(window(2, 10), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn window_centered() {
        assert_eq!(window(5, 10), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn window_shifts_back_near_end() {
        assert_eq!(window(9, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(window(10, 10), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn window_always_contains_current() {
        for total in 1..=12 {
            for current in 1..=total {
                let w = page_window(current, total);
                assert!(w.contains(&current), "current {current} total {total}");
                assert!(*w.start() >= 1 && *w.end() <= total);
                assert_eq!(w.count(), total.min(MAX_VISIBLE_PAGES));
            }
        }
    }

    #[test]
    fn first_and_previous_noop_on_page_one() {
        assert_eq!(apply_intent(1, 5, PageIntent::First), 1);
        assert_eq!(apply_intent(1, 5, PageIntent::Previous), 1);
    }

    #[test]
    fn next_and_last_noop_on_last_page() {
        assert_eq!(apply_intent(5, 5, PageIntent::Next), 5);
        assert_eq!(apply_intent(5, 5, PageIntent::Last), 5);
    }

    #[test]
    fn navigation_moves() {
        assert_eq!(apply_intent(3, 5, PageIntent::First), 1);
        assert_eq!(apply_intent(3, 5, PageIntent::Previous), 2);
        assert_eq!(apply_intent(3, 5, PageIntent::Next), 4);
        assert_eq!(apply_intent(3, 5, PageIntent::Last), 5);
    }

    #[test]
    fn jump_is_clamped() {
        assert_eq!(apply_intent(1, 5, PageIntent::Jump(4)), 4);
        assert_eq!(apply_intent(1, 5, PageIntent::Jump(0)), 1);
        assert_eq!(apply_intent(1, 5, PageIntent::Jump(99)), 5);
        assert_eq!(apply_intent(1, 0, PageIntent::Jump(3)), 1);
    }

    #[test]
    fn no_pages_stays_put() {
        assert_eq!(apply_intent(1, 0, PageIntent::Next), 1);
        assert_eq!(apply_intent(1, 0, PageIntent::Last), 1);
    }

    #[test]
    fn summary_for_middle_and_last_page() {
        assert_eq!(
            PageSummary::new(2, 5, 12),
            PageSummary {
                first: 6,
                last: 10,
                total: 12
            }
        );
        assert_eq!(
            PageSummary::new(3, 5, 12),
            PageSummary {
                first: 11,
                last: 12,
                total: 12
            }
        );
    }

    #[test]
    fn summary_for_empty_result() {
        assert_eq!(
            PageSummary::new(1, 10, 0),
            PageSummary {
                first: 0,
                last: 0,
                total: 0
            }
        );
    }
}
