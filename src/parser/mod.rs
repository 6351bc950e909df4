//! Parser for pipe-delimited log lines.
//!
//! Each raw line carries five positional fields separated by `|=|`:
//! `timestamp|=|level|=|message|=|trace|=|authorId`.
//!
//! Parsing never fails. Lines with the wrong number of fields degrade into a
//! record with empty trailing fields (or ignored extras) and carry a
//! [`LineIssue`] so the caller can report them.

use crate::model::{LineIssue, LogRecord};

/// Field separator used by the log service.
pub const FIELD_DELIMITER: &str = "|=|";

/// Number of positional fields in a well-formed line.
pub const FIELD_COUNT: usize = 5;

/// A parsed line together with any degradation flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// The record, with defaults filled in for missing fields.
    pub record: LogRecord,
    /// Set when the line did not have exactly five fields.
    pub issue: Option<LineIssue>,
}

/// A line that did not have exactly five fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    /// Zero-based position in the fetched batch.
    pub index: usize,
    /// The line as received.
    pub raw: String,
    /// What was wrong with it.
    pub issue: LineIssue,
}

/// Result of parsing a whole batch.
///
/// `records` always has one entry per input line, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Every parsed record, malformed ones included.
    pub records: Vec<LogRecord>,
    /// Lines that were degraded, in input order.
    pub malformed: Vec<MalformedLine>,
}

/// Parse one line into a record, discarding the degradation flag.
pub fn parse_line(line: &str) -> LogRecord {
    parse_line_checked(line).record
}

/// Parse one line and report whether it had the expected field count.
pub fn parse_line_checked(line: &str) -> ParsedLine {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    let found = fields.len();

    let field = |index: usize| fields.get(index).copied().unwrap_or_default();
    let record = LogRecord::new(field(0), field(1), field(2), field(3), field(4));

    let issue = match found.cmp(&FIELD_COUNT) {
        std::cmp::Ordering::Less => Some(LineIssue::MissingFields { found }),
        std::cmp::Ordering::Greater => Some(LineIssue::ExtraFields { found }),
        std::cmp::Ordering::Equal => None,
    };

    ParsedLine { record, issue }
}

/// Parse a batch of raw lines, preserving order.
pub fn parse_lines(lines: Vec<String>) -> ParseReport {
    let mut report = ParseReport {
        records: Vec::with_capacity(lines.len()),
        malformed: Vec::new(),
    };

    for (index, raw) in lines.into_iter().enumerate() {
        let ParsedLine { record, issue } = parse_line_checked(&raw);
        report.records.push(record);
        if let Some(issue) = issue {
            report.malformed.push(MalformedLine { index, raw, issue });
        }
    }

    report
}
