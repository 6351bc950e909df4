//! Derivation pipeline: filter -> sort -> paginate.
//!
//! Every function here is pure. The visible page is recomputed from the full
//! record set and the current criteria whenever either changes; nothing is
//! cached between calls, so the result can never go stale.

use crate::model::LogRecord;
use crate::state::{FilterCriteria, SortDirection, ViewOptions};
use std::cmp::Ordering;
use std::collections::HashSet;

/// The visible slice of the record set plus the counts the pagination bar needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedView<'a> {
    /// Rows on the current page, in display order.
    pub rows: Vec<&'a LogRecord>,
    /// Number of records that passed the filter (before paging).
    pub total_items: usize,
    /// `ceil(total_items / items_per_page)`; zero when nothing matched.
    pub total_pages: usize,
    /// 1-based page the rows were sliced from.
    pub current_page: usize,
    /// Page size used for the slice.
    pub items_per_page: usize,
}

impl DerivedView<'_> {
    /// True when the filter matched nothing.
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }
}

// ===== Filter =====

/// Whether a record passes every active predicate.
///
/// Predicates are ANDed: message equality (an empty message selects all),
/// case-insensitive substring search over message/trace/author/level, and
/// inclusive date bounds. A record whose timestamp does not parse fails any
/// active date bound.
pub fn matches(record: &LogRecord, criteria: &FilterCriteria) -> bool {
    if let Some(message) = criteria.message.as_deref().filter(|m| !m.is_empty()) {
        if record.message() != message {
            return false;
        }
    }

    if let Some(needle) = criteria.search_needle() {
        if !matches_search(record, &needle) {
            return false;
        }
    }

    if criteria.start_date().is_none() && criteria.end_date().is_none() {
        return true;
    }

    let Some(timestamp) = record.parsed_timestamp() else {
        return false;
    };

    if let Some(start) = criteria.start_date() {
        if timestamp < start.instant() {
            return false;
        }
    }

    if let Some(end) = criteria.end_date() {
        if timestamp > end.instant() {
            return false;
        }
    }

    true
}

fn matches_search(record: &LogRecord, needle_lower: &str) -> bool {
    [
        record.message(),
        record.trace(),
        record.author_id(),
        record.level(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle_lower))
}

/// Keep matching records, in source order.
pub fn filter<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a LogRecord>
where
    I: IntoIterator<Item = &'a LogRecord>,
{
    records
        .into_iter()
        .filter(|record| matches(record, criteria))
        .collect()
}

// ===== Sort =====

/// Sort rows by timestamp in place.
///
/// Stable: equal timestamps keep their relative order. Records whose
/// timestamp does not parse go after all others in either direction.
pub fn sort(rows: &mut [&LogRecord], direction: SortDirection) {
    if direction == SortDirection::Unsorted {
        return;
    }

    // Parse once rather than on every comparison.
    let mut keyed: Vec<_> = rows
        .iter()
        .map(|record| (record.parsed_timestamp(), *record))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => match direction {
            SortDirection::Descending => b.cmp(a),
            _ => a.cmp(b),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    for (slot, (_, record)) in rows.iter_mut().zip(keyed) {
        *slot = record;
    }
}

// ===== Paginate =====

/// Number of pages needed for `total_items`.
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    total_items.div_ceil(items_per_page)
}

/// Slice `[(page-1)*per_page, page*per_page)`, clamped to the available rows.
///
/// `page` is 1-based; page 0 is treated as page 1.
pub fn paginate<T>(rows: &[T], page: usize, items_per_page: usize) -> &[T] {
    let start = page
        .saturating_sub(1)
        .saturating_mul(items_per_page)
        .min(rows.len());
    let end = start.saturating_add(items_per_page).min(rows.len());
    &rows[start..end]
}

// ===== Derive =====

/// Run the whole pipeline for the current state.
pub fn derive<'a>(
    records: &'a [LogRecord],
    criteria: &FilterCriteria,
    view: &ViewOptions,
) -> DerivedView<'a> {
    let per_page = view.items_per_page.get();

    let mut rows = filter(records, criteria);
    sort(&mut rows, view.sort);

    let total_items = rows.len();
    let page_rows = paginate(&rows, view.current_page, per_page).to_vec();

    DerivedView {
        rows: page_rows,
        total_items,
        total_pages: total_pages(total_items, per_page),
        current_page: view.current_page,
        items_per_page: per_page,
    }
}

/// Distinct non-empty message values in first-seen order.
///
/// An empty message is never offered: selecting it would read as "All Messages".
pub fn distinct_messages(records: &[LogRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut messages = Vec::new();
    for record in records {
        if !record.message().is_empty() && seen.insert(record.message()) {
            messages.push(record.message().to_string());
        }
    }
    messages
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
