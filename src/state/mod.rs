//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod criteria;
pub mod input_handler;
pub mod pagination;
pub mod pipeline;
pub mod view_options;

// Re-export for convenience
pub use app_state::{AppState, LoadState};
pub use criteria::{DateBound, DateBoundError, FilterCriteria};
pub use input_handler::{InputBuffer, InputField};
pub use pagination::{PageIntent, PageSummary};
pub use pipeline::DerivedView;
pub use view_options::{InvalidPageSize, PageSize, SortDirection, ViewOptions, PAGE_SIZES};
