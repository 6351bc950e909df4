//! Log input sources.
//!
//! This module provides sources for the raw log batch:
//! - HTTP fetch from the log endpoint (the normal case)
//! - A saved JSON response on disk (offline viewing)
//!
//! Sources return raw lines; parsing happens at this boundary in
//! [`load_records`] so application state only ever sees `LogRecord`s.

use crate::model::FetchError;
use crate::parser::{self, ParseReport};
use std::path::PathBuf;
use tracing::{info, warn};

pub mod file;
pub mod http;

pub use file::FileSource;
pub use http::HttpSource;

/// Anything that can produce one batch of raw log lines.
///
/// Each call is a full, independent fetch. There is no incremental state.
pub trait LogSource {
    /// Fetch the whole batch.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the batch could not be obtained; no partial
    /// batch is ever returned.
    fn fetch(&mut self) -> Result<Vec<String>, FetchError>;

    /// Human-readable origin shown in the header bar.
    fn describe(&self) -> String;
}

/// Unified input source.
///
/// Sum type enforces exactly one variant.
#[derive(Debug)]
pub enum InputSource {
    /// Remote endpoint.
    Http(HttpSource),
    /// Saved response file.
    File(FileSource),
}

impl LogSource for InputSource {
    fn fetch(&mut self) -> Result<Vec<String>, FetchError> {
        match self {
            InputSource::Http(h) => h.fetch(),
            InputSource::File(f) => f.fetch(),
        }
    }

    fn describe(&self) -> String {
        match self {
            InputSource::Http(h) => h.describe(),
            InputSource::File(f) => f.describe(),
        }
    }
}

/// Pick the input source.
///
/// A file path wins over the endpoint; otherwise the endpoint is used with
/// the base64-encoded key.
pub fn detect_input_source(
    file: Option<PathBuf>,
    endpoint: &str,
    api_key_base64: &str,
) -> InputSource {
    match file {
        Some(path) => InputSource::File(FileSource::new(path)),
        None => InputSource::Http(HttpSource::new(endpoint, api_key_base64)),
    }
}

/// Fetch a batch and parse every line, preserving source order.
///
/// Malformed lines are logged and kept as degraded records.
///
/// # Errors
///
/// Propagates the source's `FetchError` unchanged.
pub fn load_records(source: &mut dyn LogSource) -> Result<ParseReport, FetchError> {
    let lines = source.fetch()?;
    let report = parser::parse_lines(lines);

    for malformed in &report.malformed {
        warn!(
            index = malformed.index,
            issue = %malformed.issue,
            "Malformed log line kept with defaulted fields"
        );
    }

    info!(
        records = report.records.len(),
        malformed = report.malformed.len(),
        source = %source.describe(),
        "Loaded log batch"
    );

    Ok(report)
}
