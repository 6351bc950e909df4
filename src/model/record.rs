//! Parsed log records.
//!
//! A `LogRecord` is created in bulk when a batch is fetched and is never
//! mutated afterwards: fields are private and only exposed through accessors.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// One parsed log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    timestamp: String,
    level: String,
    message: String,
    trace: String,
    author_id: String,
}

impl LogRecord {
    /// Build a record from its five positional fields.
    ///
    /// `message` is lower-cased; every other field is stored as given.
    pub fn new(
        timestamp: impl Into<String>,
        level: impl Into<String>,
        message: impl AsRef<str>,
        trace: impl Into<String>,
        author_id: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            level: level.into(),
            message: message.as_ref().to_lowercase(),
            trace: trace.into(),
            author_id: author_id.into(),
        }
    }

    /// Raw timestamp text as received.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Severity text as received (`high`, `low`, ...).
    pub fn level(&self) -> &str {
        &self.level
    }

    /// Lower-cased message category text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Trace or stack text.
    pub fn trace(&self) -> &str {
        &self.trace
    }

    /// Identifier of the user or service that emitted the line.
    pub fn author_id(&self) -> &str {
        &self.author_id
    }

    /// Advisory category of the message, used for coloring.
    pub fn category(&self) -> MessageCategory {
        MessageCategory::classify(&self.message)
    }

    /// Timestamp parsed as UTC, or `None` if the text is not a recognised date-time.
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        parse_datetime(&self.timestamp)
    }
}

// ===== MessageCategory =====

/// Known message categories.
///
/// The message field is free text from an external service. This is only a
/// classification for styling and never rejects a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageCategory {
    /// `warn`
    Warn,
    /// `error`
    Error,
    /// `trace`
    Trace,
    /// `debug`
    Debug,
    /// `info`
    Info,
    /// Empty or unrecognised text.
    Other,
}

impl MessageCategory {
    /// Classify message text. Matching is case-insensitive.
    pub fn classify(message: &str) -> Self {
        match message.trim().to_lowercase().as_str() {
            "warn" => Self::Warn,
            "error" => Self::Error,
            "trace" => Self::Trace,
            "debug" => Self::Debug,
            "info" => Self::Info,
            _ => Self::Other,
        }
    }
}

// ===== Date-time parsing =====

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 style date-time.
///
/// Accepts RFC 3339 with an offset, naive date-times with or without seconds,
/// and bare dates (midnight). Naive values are taken as UTC.
pub fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    parse_datetime_in(raw, &Utc)
}

/// Like [`parse_datetime`], but naive values are wall-clock time in `zone`.
///
/// A local time skipped by a DST change does not parse; an ambiguous one
/// resolves to the earlier instant.
pub fn parse_datetime_in<Tz: TimeZone>(raw: &str, zone: &Tz) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;

    zone.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}
