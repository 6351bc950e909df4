//! Error types for logsift.
//!
//! Errors are `thiserror` enums composed with `?` and `From`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - top-level error returned from `main`
//!   - [`FetchError`] - loading the raw log batch failed (network, status, decoding)
//!   - [`ConfigError`](crate::config::ConfigError) - config file could not be read or parsed
//!   - [`LoggingError`](crate::logging::LoggingError) - tracing setup failed
//!   - `TuiError` - terminal setup or rendering failed
//!
//! # Recovery Strategy
//!
//! A `FetchError` is **non-fatal**: the viewer clears its record set, shows the
//! message, and offers a retry. Malformed log lines are not errors at all; they
//! degrade into records with empty fields and are flagged with a [`LineIssue`].
//! Config, logging and terminal errors are fatal and end the process.

use std::path::PathBuf;
use thiserror::Error;

/// Message used when a failure carries no text of its own.
pub const GENERIC_FETCH_FAILURE: &str = "Failed to fetch logs";

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Logging could not be initialised.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal UI failed.
    #[error("Terminal error: {0}")]
    Tui(#[from] crate::view::TuiError),
}

/// Failure to load a batch of log lines.
///
/// Any variant discards the whole batch; partial results are never kept.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The endpoint answered with a non-success HTTP status.
    #[error("Failed to fetch logs: {status}")]
    Status {
        /// Status text (reason phrase, or the numeric code if there is none).
        status: String,
    },

    /// The request could not be completed or the body could not be read.
    #[error("{message}")]
    Transport {
        /// Underlying error message.
        message: String,
    },

    /// The configured key is not valid base64 or does not decode to text.
    #[error("Invalid API key encoding: {reason}")]
    InvalidKey {
        /// Decoder error text.
        reason: String,
    },

    /// A local response file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The body was not a JSON array of strings.
    #[error("Invalid log payload: {reason}")]
    Decode {
        /// JSON error text.
        reason: String,
    },
}

impl FetchError {
    /// Wrap an underlying error message, defaulting to a generic one when empty.
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Transport {
                message: GENERIC_FETCH_FAILURE.to_string(),
            }
        } else {
            Self::Transport { message }
        }
    }
}

/// Why a log line degraded while parsing.
///
/// Lines are never rejected; this flag travels next to the degraded record so
/// the caller can log and count it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LineIssue {
    /// Fewer than five fields; the missing trailing fields are empty.
    #[error("expected 5 fields, found {found}")]
    MissingFields {
        /// Fields actually present.
        found: usize,
    },

    /// More than five fields; the extra ones are ignored.
    #[error("expected 5 fields, found {found} (extra fields ignored)")]
    ExtraFields {
        /// Fields actually present.
        found: usize,
    },
}
