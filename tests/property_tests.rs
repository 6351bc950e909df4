//! Property-based tests for the parser and the derivation pipeline.
//!
//! Tests validate:
//! 1. Five-field lines parse without loss (message lower-cased)
//! 2. Filtering is idempotent and search ignores case
//! 3. Sorting is stable and orders parseable timestamps
//! 4. Filter and sort commute
//! 5. Pages partition the filtered rows
//! 6. Date bounds never end up inverted

use chrono::{TimeZone, Utc};
use logsift::model::LogRecord;
use logsift::parser::{parse_line_checked, FIELD_DELIMITER};
use logsift::state::pipeline::{filter, paginate, sort, total_pages};
use logsift::state::{DateBound, FilterCriteria, SortDirection, PAGE_SIZES};
use proptest::prelude::*;

// ===== Strategies =====

fn arb_field() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 :._-]{0,12}"
}

fn arb_timestamp() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "2024-01-01T10:00:00Z",
        "2024-01-01T10:00:00Z",
        "2024-01-02",
        "2024-01-02T08:30",
        "2024-03-15 12:00:00",
        "2023-12-31T23:59:59+02:00",
        "not a date",
        "",
    ])
    .prop_map(str::to_string)
}

fn arb_message() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["INFO", "warn", "Error", "debug", "trace", "custom"])
        .prop_map(str::to_string)
}

/// Records whose trace holds their original index, so order can be checked.
fn arb_records(max_len: usize) -> impl Strategy<Value = Vec<LogRecord>> {
    prop::collection::vec((arb_timestamp(), arb_message(), arb_field()), 0..max_len).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (ts, message, author))| {
                    LogRecord::new(ts, "low", message, format!("#{i}"), author)
                })
                .collect()
        },
    )
}

fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        prop::option::of(prop::sample::select(vec!["info", "error", "custom"])),
        prop::sample::select(vec!["", "a", "E", "#1", " "]),
        prop::option::of(0u32..3),
    )
        .prop_map(|(message, search, start_day)| {
            let mut criteria = FilterCriteria::default();
            criteria.search = search.to_string();
            criteria.message = message.map(str::to_string);
            if let Some(offset) = start_day {
                let instant = Utc
                    .with_ymd_and_hms(2024, 1, 1 + offset, 0, 0, 0)
                    .single()
                    .expect("valid date");
                criteria.set_start_date(Some(DateBound::from_instant(instant)));
            }
            criteria
        })
}

fn arb_direction() -> impl Strategy<Value = SortDirection> {
    prop::sample::select(vec![
        SortDirection::Unsorted,
        SortDirection::Ascending,
        SortDirection::Descending,
    ])
}

fn index_of(record: &LogRecord) -> usize {
    record.trace()[1..].parse().expect("trace holds index")
}

// ===== Property 1: Parsing =====

proptest! {
    #[test]
    fn five_field_lines_parse_losslessly(
        ts in arb_field(),
        level in arb_field(),
        message in arb_field(),
        trace in arb_field(),
        author in arb_field(),
    ) {
        let line = [ts.as_str(), &level, &message, &trace, &author].join(FIELD_DELIMITER);

        let parsed = parse_line_checked(&line);

        prop_assert_eq!(parsed.issue, None);
        prop_assert_eq!(parsed.record.timestamp(), ts.as_str());
        prop_assert_eq!(parsed.record.level(), level.as_str());
        prop_assert_eq!(parsed.record.message(), message.to_lowercase());
        prop_assert_eq!(parsed.record.trace(), trace.as_str());
        prop_assert_eq!(parsed.record.author_id(), author.as_str());
    }

    #[test]
    fn short_lines_are_flagged(fields in prop::collection::vec(arb_field(), 1..5)) {
        let line = fields.join(FIELD_DELIMITER);
        prop_assert!(parse_line_checked(&line).issue.is_some());
    }
}

// ===== Property 2: Filtering =====

proptest! {
    #[test]
    fn filter_is_idempotent(records in arb_records(30), criteria in arb_criteria()) {
        let once = filter(&records, &criteria);
        let twice = filter(once.iter().copied(), &criteria);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn search_ignores_case(records in arb_records(30), needle in "[a-zA-Z]{1,3}") {
        let mut lower = FilterCriteria::default();
        lower.search = needle.to_lowercase();
        let mut upper = FilterCriteria::default();
        upper.search = needle.to_uppercase();
        prop_assert_eq!(filter(&records, &lower), filter(&records, &upper));
    }

    #[test]
    fn empty_criteria_keeps_everything(records in arb_records(30)) {
        prop_assert_eq!(filter(&records, &FilterCriteria::default()).len(), records.len());
    }
}

// ===== Property 3: Sorting =====

proptest! {
    #[test]
    fn sort_is_stable_and_ordered(records in arb_records(40), direction in arb_direction()) {
        let mut rows: Vec<&LogRecord> = records.iter().collect();
        sort(&mut rows, direction);

        prop_assert_eq!(rows.len(), records.len());

        if direction == SortDirection::Unsorted {
            let order: Vec<usize> = rows.iter().map(|r| index_of(r)).collect();
            prop_assert_eq!(order, (0..records.len()).collect::<Vec<_>>());
            return Ok(());
        }

        for pair in rows.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            match (a.parsed_timestamp(), b.parsed_timestamp()) {
                (Some(ta), Some(tb)) => {
                    if direction == SortDirection::Ascending {
                        prop_assert!(ta <= tb);
                    } else {
                        prop_assert!(ta >= tb);
                    }
                    if ta == tb {
                        prop_assert!(index_of(a) < index_of(b));
                    }
                }
                // Unparseable timestamps trail in both directions
                (None, Some(_)) => prop_assert!(false, "unparseable before parseable"),
                (None, None) => prop_assert!(index_of(a) < index_of(b)),
                (Some(_), None) => {}
            }
        }
    }

    #[test]
    fn filter_and_sort_commute(
        records in arb_records(30),
        criteria in arb_criteria(),
        direction in arb_direction(),
    ) {
        let mut filter_then_sort = filter(&records, &criteria);
        sort(&mut filter_then_sort, direction);

        let mut all: Vec<&LogRecord> = records.iter().collect();
        sort(&mut all, direction);
        let sort_then_filter = filter(all, &criteria);

        prop_assert_eq!(filter_then_sort, sort_then_filter);
    }
}

// ===== Property 4: Pagination =====

proptest! {
    #[test]
    fn pages_partition_rows(
        len in 0usize..260,
        size in prop::sample::select(PAGE_SIZES.to_vec()),
    ) {
        let rows: Vec<usize> = (0..len).collect();
        let pages = total_pages(len, size);

        prop_assert_eq!(pages, len.div_ceil(size));

        let mut rebuilt = Vec::new();
        for page in 1..=pages {
            let slice = paginate(&rows, page, size);
            prop_assert!(!slice.is_empty());
            prop_assert!(slice.len() <= size);
            rebuilt.extend_from_slice(slice);
        }
        prop_assert_eq!(rebuilt, rows.clone());
        prop_assert!(paginate(&rows, pages + 1, size).is_empty());
    }
}

// ===== Property 5: Date range =====

proptest! {
    #[test]
    fn date_range_never_inverted(ops in prop::collection::vec((any::<bool>(), 0i64..400), 0..12)) {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().expect("valid date");
        let mut criteria = FilterCriteria::default();

        for (is_start, hours) in ops {
            let bound = DateBound::from_instant(base + chrono::Duration::hours(hours));
            if is_start {
                criteria.set_start_date(Some(bound));
            } else {
                criteria.set_end_date(Some(bound));
            }

            if let (Some(start), Some(end)) = (criteria.start_date(), criteria.end_date()) {
                prop_assert!(start.instant() <= end.instant());
            }
        }
    }
}
