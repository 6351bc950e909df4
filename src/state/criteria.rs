//! Filter criteria.
//!
//! `FilterCriteria` holds the user-selected filters. Date bounds are stored
//! both as the text the user typed and the parsed instant, so the filter bar
//! can echo the input while the pipeline compares instants.

use crate::model::parse_datetime_in;
use chrono::{DateTime, Local, TimeZone, Utc};
use thiserror::Error;

// ===== DateBound =====

/// An inclusive date-time bound on the record timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateBound {
    text: String,
    instant: DateTime<Utc>,
}

/// Reasons a date bound was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateBoundError {
    /// Not a recognised date or date-time.
    #[error("Unrecognised date '{0}' (use YYYY-MM-DD or YYYY-MM-DDTHH:MM)")]
    Unparseable(String),

    /// Later than the current time.
    #[error("Date '{0}' is in the future")]
    InFuture(String),
}

impl DateBound {
    /// Parse user input into a bound, reading times without an offset in
    /// the machine's local time zone.
    ///
    /// Returns `Ok(None)` for blank input, which clears the bound.
    ///
    /// # Errors
    ///
    /// Rejects text that is not a recognised date-time, or that lies after `now`.
    pub fn parse(text: &str, now: DateTime<Utc>) -> Result<Option<Self>, DateBoundError> {
        Self::parse_in(text, now, &Local)
    }

    /// [`parse`](Self::parse) with an explicit zone for offset-less input.
    ///
    /// # Errors
    ///
    /// Same as [`parse`](Self::parse).
    pub fn parse_in<Tz: TimeZone>(
        text: &str,
        now: DateTime<Utc>,
        zone: &Tz,
    ) -> Result<Option<Self>, DateBoundError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let instant = parse_datetime_in(text, zone)
            .ok_or_else(|| DateBoundError::Unparseable(text.to_string()))?;

        if instant > now {
            return Err(DateBoundError::InFuture(text.to_string()));
        }

        Ok(Some(Self {
            text: text.to_string(),
            instant,
        }))
    }

    /// Build a bound from an instant, formatting it as `YYYY-MM-DDTHH:MM:SSZ`.
    pub fn from_instant(instant: DateTime<Utc>) -> Self {
        Self {
            text: instant.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            instant,
        }
    }

    /// Text as typed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parsed instant in UTC.
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }
}

// ===== FilterCriteria =====

/// Active filter configuration.
///
/// `Default` is the unfiltered state. Date bounds are only settable through
/// [`set_start_date`](Self::set_start_date) and [`set_end_date`](Self::set_end_date),
/// which never leave the range inverted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring query. Blank means unrestricted.
    pub search: String,
    /// Exact message category, or `None` for all.
    pub message: Option<String>,
    start_date: Option<DateBound>,
    end_date: Option<DateBound>,
}

impl FilterCriteria {
    /// True when no filter would exclude any record.
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.message.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }

    /// Lower-cased search text, or `None` when blank.
    ///
    /// Surrounding whitespace is kept and takes part in matching.
    pub fn search_needle(&self) -> Option<String> {
        let trimmed = self.search.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(self.search.to_lowercase())
        }
    }

    /// Inclusive lower bound, if set.
    pub fn start_date(&self) -> Option<&DateBound> {
        self.start_date.as_ref()
    }

    /// Inclusive upper bound, if set.
    pub fn end_date(&self) -> Option<&DateBound> {
        self.end_date.as_ref()
    }

    /// Set the start bound, clearing the end bound if the range would invert.
    pub fn set_start_date(&mut self, bound: Option<DateBound>) {
        self.start_date = bound;
        self.clear_inverted_range();
    }

    /// Set the end bound, clearing it again if it precedes the start bound.
    pub fn set_end_date(&mut self, bound: Option<DateBound>) {
        self.end_date = bound;
        self.clear_inverted_range();
    }

    fn clear_inverted_range(&mut self) {
        if let (Some(start), Some(end)) = (&self.start_date, &self.end_date) {
            if end.instant < start.instant {
                self.end_date = None;
            }
        }
    }
}
