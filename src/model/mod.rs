//! Domain model types (pure).
//!
//! All types in this module are plain data with no I/O.

pub mod error;
pub mod key_action;
pub mod record;

// Re-export for convenience
pub use error::{AppError, FetchError, LineIssue, GENERIC_FETCH_FAILURE};
pub use key_action::KeyAction;
pub use record::{parse_datetime, parse_datetime_in, LogRecord, MessageCategory};
