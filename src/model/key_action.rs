//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Filters
    /// Start editing the free-text search. Default: /
    EditSearch,
    /// Start editing the start date bound. Default: s
    EditStartDate,
    /// Start editing the end date bound. Default: e
    EditEndDate,
    /// Select the next message category. Default: m
    NextMessageFilter,
    /// Select the previous message category. Default: M
    PrevMessageFilter,
    /// Reset all filters. Default: c
    ClearFilters,

    // Sorting
    /// Cycle timestamp sort: unsorted, ascending, descending. Default: t
    ToggleSort,

    // Pagination
    /// Go to page 1. Default: Home/g
    FirstPage,
    /// Go back one page. Default: ←/h/p
    PrevPage,
    /// Go forward one page. Default: →/l/n
    NextPage,
    /// Go to the last page. Default: End/G
    LastPage,
    /// Open the go-to-page prompt. Default: :
    GoToPage,
    /// Select the next larger page size. Default: +
    IncreasePageSize,
    /// Select the next smaller page size. Default: -
    DecreasePageSize,

    // Application
    /// Re-run the fetch and replace all records. Default: r
    Reload,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
