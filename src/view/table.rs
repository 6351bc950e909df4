//! Results table.

use super::constants::TIMESTAMP_FORMAT;
use super::styles::Theme;
use crate::model::LogRecord;
use crate::state::SortDirection;
use ratatui::{
    layout::Constraint,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table},
};

/// Column widths: Timestamp, Level, Message, Trace, Author ID.
const COLUMN_WIDTHS: [Constraint; 5] = [
    Constraint::Length(19),
    Constraint::Length(10),
    Constraint::Length(8),
    Constraint::Min(20),
    Constraint::Length(18),
];

/// `YYYY-MM-DD HH:MM:SS` when the timestamp parses, the raw text otherwise.
pub fn format_timestamp(record: &LogRecord) -> String {
    match record.parsed_timestamp() {
        Some(instant) => instant.format(TIMESTAMP_FORMAT).to_string(),
        None => record.timestamp().to_string(),
    }
}

/// Message text with its first letter upper-cased, as shown in the badge.
pub fn display_message(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Build the table widget for one page of records.
pub fn results_table<'a>(rows: &[&'a LogRecord], sort: SortDirection, theme: Theme) -> Table<'a> {
    let header = Row::new(vec![
        Cell::from(format!("Timestamp {}", sort.indicator())),
        Cell::from("Level"),
        Cell::from("Message"),
        Cell::from("Trace"),
        Cell::from("Author ID"),
    ])
    .style(theme.table_header());

    let body = rows.iter().map(|&record| {
        Row::new(vec![
            Cell::from(format_timestamp(record)),
            Cell::from(record.level()),
            Cell::from(Line::from(Span::styled(
                display_message(record.message()),
                theme.category(record.category()),
            ))),
            Cell::from(record.trace()),
            Cell::from(record.author_id()),
        ])
    });

    Table::new(body, COLUMN_WIDTHS)
        .header(header)
        .column_spacing(1)
        .block(Block::default().borders(Borders::ALL).title(" Logs "))
}
