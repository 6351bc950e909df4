//! Application state and transitions.
//!
//! `AppState` is the single state object. Every user intent is a method on
//! it, and each method re-establishes the invariants before returning:
//!
//! - changing any filter or the sort direction resets to page 1
//! - changing the page size resets to page 1
//! - the date range is never inverted (an end bound before the start bound
//!   is cleared)
//! - a fetch either replaces the record set wholesale or clears it
//!
//! What is displayed is always derived from the state via
//! [`pipeline::derive`](crate::state::pipeline::derive); nothing derived is
//! stored here.

use crate::model::{FetchError, LogRecord};
use crate::parser::ParseReport;
use crate::state::input_handler::{InputBuffer, InputField};
use crate::state::pagination::{self, PageIntent};
use crate::state::pipeline::{self, DerivedView};
use crate::state::{DateBound, FilterCriteria, PageSize, ViewOptions};
use chrono::{DateTime, Utc};
use tracing::debug;

// ===== LoadState =====

/// Where the record set came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// A fetch is in progress; nothing has been loaded yet or a reload started.
    Loading,
    /// The last fetch succeeded.
    Ready,
    /// The last fetch failed; the record set is empty.
    Failed(String),
}

// ===== AppState =====

/// Application state. Pure data, no I/O.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Last successfully fetched records, in source order.
    records: Vec<LogRecord>,

    /// Distinct message values of `records`, first-seen order.
    /// Recomputed only when `records` is replaced.
    messages: Vec<String>,

    /// Number of lines in the last batch that did not have five fields.
    malformed_count: usize,

    criteria: FilterCriteria,
    view: ViewOptions,

    /// Fetch status.
    pub load: LoadState,

    /// Field currently being edited, if any.
    pub input: Option<InputBuffer>,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,

    /// One-line message for the status bar (rejected input and the like).
    pub notice: Option<String>,

    /// Where the records come from, shown in the header.
    pub source_label: String,
}

impl AppState {
    /// Create a state in the `Loading` phase with the given page size.
    pub fn new(items_per_page: PageSize) -> Self {
        Self {
            records: Vec::new(),
            messages: Vec::new(),
            malformed_count: 0,
            criteria: FilterCriteria::default(),
            view: ViewOptions::new(items_per_page),
            load: LoadState::Loading,
            input: None,
            help_visible: false,
            notice: None,
            source_label: String::new(),
        }
    }

    // ===== Accessors =====

    /// Every record of the last successful fetch, in fetch order.
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    /// Message categories offered by the selector (without the "all" entry).
    pub fn message_options(&self) -> &[String] {
        &self.messages
    }

    /// Lines in the last batch that did not have five fields.
    pub fn malformed_count(&self) -> usize {
        self.malformed_count
    }

    /// Active filters.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Page, page size and sort.
    pub fn view(&self) -> &ViewOptions {
        &self.view
    }

    /// Run the pipeline for the current state.
    pub fn derived(&self) -> DerivedView<'_> {
        pipeline::derive(&self.records, &self.criteria, &self.view)
    }

    // ===== Loading =====

    /// Enter the loading phase before a (re)fetch.
    pub fn begin_load(&mut self) {
        self.load = LoadState::Loading;
        self.notice = None;
    }

    /// Apply the outcome of a fetch.
    ///
    /// Success replaces the records wholesale; failure clears them and keeps
    /// the error message for display. Either way the view returns to page 1.
    pub fn apply_fetch_result(&mut self, result: Result<ParseReport, FetchError>) {
        match result {
            Ok(report) => {
                self.messages = pipeline::distinct_messages(&report.records);
                self.malformed_count = report.malformed.len();
                self.records = report.records;
                self.load = LoadState::Ready;
            }
            Err(err) => {
                self.records.clear();
                self.messages.clear();
                self.malformed_count = 0;
                self.load = LoadState::Failed(err.to_string());
            }
        }
        self.view.current_page = 1;
    }

    // ===== Filters =====

    /// Replace the search text and go back to page 1.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.criteria.search = text.into();
        self.view.current_page = 1;
    }

    /// Restrict to one message value, or `None` for all messages.
    ///
    /// An empty value is stored as `None`.
    pub fn set_message_filter(&mut self, message: Option<String>) {
        self.criteria.message = message.filter(|m| !m.is_empty());
        self.view.current_page = 1;
    }

    /// Step through `[All, messages...]`.
    ///
    /// A selection that is no longer among the loaded messages restarts from "All".
    pub fn cycle_message_filter(&mut self, forward: bool) {
        let options = self.messages.len() + 1;
        let current = match &self.criteria.message {
            None => 0,
            Some(selected) => self
                .messages
                .iter()
                .position(|m| m == selected)
                .map_or(0, |i| i + 1),
        };

        let next = if forward {
            (current + 1) % options
        } else {
            (current + options - 1) % options
        };

        let message = if next == 0 {
            None
        } else {
            Some(self.messages[next - 1].clone())
        };
        self.set_message_filter(message);
    }

    /// Set the start bound; an end bound that would precede it is cleared.
    pub fn set_start_date(&mut self, bound: Option<DateBound>) {
        self.criteria.set_start_date(bound);
        self.view.current_page = 1;
    }

    /// Set the end bound; it is cleared again if it precedes the start bound.
    pub fn set_end_date(&mut self, bound: Option<DateBound>) {
        self.criteria.set_end_date(bound);
        self.view.current_page = 1;
    }

    /// Reset every filter field. Sort direction and page size are kept.
    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.view.current_page = 1;
        self.input = None;
    }

    // ===== Sort and pages =====

    /// Cycle unsorted -> ascending -> descending -> unsorted.
    pub fn toggle_sort(&mut self) {
        self.view.sort = self.view.sort.toggled();
        self.view.current_page = 1;
    }

    /// Change the page size and go back to page 1.
    pub fn set_items_per_page(&mut self, size: PageSize) {
        self.view.items_per_page = size;
        self.view.current_page = 1;
    }

    /// Step to the next larger or smaller allowed size, wrapping around.
    pub fn cycle_items_per_page(&mut self, larger: bool) {
        let current = self.view.items_per_page;
        self.set_items_per_page(if larger {
            current.larger()
        } else {
            current.smaller()
        });
    }

    /// Navigate pages against the current derived page count.
    pub fn page(&mut self, intent: PageIntent) {
        let total = self.derived().total_pages;
        self.view.current_page = pagination::apply_intent(self.view.current_page, total, intent);
    }

    // ===== Text input =====

    /// Start editing `field`, seeded with its current value.
    pub fn begin_input(&mut self, field: InputField) {
        let text = match field {
            InputField::Search => self.criteria.search.clone(),
            InputField::StartDate => bound_text(self.criteria.start_date()),
            InputField::EndDate => bound_text(self.criteria.end_date()),
            InputField::GoToPage => String::new(),
        };
        self.input = Some(InputBuffer::new(field, text));
        self.notice = None;
    }

    /// Apply a pure edit to the active buffer.
    ///
    /// The search field filters on every keystroke.
    pub fn edit_input(&mut self, edit: impl FnOnce(InputBuffer) -> InputBuffer) {
        let Some(buffer) = self.input.take() else {
            return;
        };
        let buffer = edit(buffer);
        if buffer.field.is_live() && buffer.text != self.criteria.search {
            self.set_search(buffer.text.clone());
        }
        self.input = Some(buffer);
    }

    /// Leave the active field without applying it.
    ///
    /// Search is already applied while typing, so it is kept.
    pub fn cancel_input(&mut self) {
        self.input = None;
    }

    /// Apply the active field.
    ///
    /// Date input that does not parse or lies after `now` is rejected: the
    /// field stays open and a notice explains why.
    pub fn submit_input(&mut self, now: DateTime<Utc>) {
        let Some(buffer) = self.input.take() else {
            return;
        };

        let outcome = match buffer.field {
            InputField::Search => {
                self.set_search(buffer.text.clone());
                Ok(())
            }
            InputField::StartDate => {
                DateBound::parse(&buffer.text, now).map(|bound| self.set_start_date(bound))
            }
            InputField::EndDate => {
                DateBound::parse(&buffer.text, now).map(|bound| self.set_end_date(bound))
            }
            InputField::GoToPage => {
                match buffer.text.trim().parse::<usize>() {
                    Ok(page) => self.page(PageIntent::Jump(page)),
                    Err(_) => self.notice = Some(format!("Not a page number: {}", buffer.text)),
                }
                Ok(())
            }
        };

        if let Err(err) = outcome {
            debug!(field = ?buffer.field, error = %err, "Rejected date input");
            self.notice = Some(err.to_string());
            self.input = Some(buffer);
        }
    }
}

fn bound_text(bound: Option<&DateBound>) -> String {
    bound.map(|b| b.text().to_string()).unwrap_or_default()
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
