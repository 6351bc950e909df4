//! Sort direction, page size and current page.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ===== SortDirection =====

/// Timestamp sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Source order.
    #[default]
    Unsorted,
    /// Oldest first.
    Ascending,
    /// Newest first.
    Descending,
}

impl SortDirection {
    /// Next direction in the cycle `Unsorted -> Ascending -> Descending -> Unsorted`.
    pub fn toggled(self) -> Self {
        match self {
            Self::Unsorted => Self::Ascending,
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Unsorted,
        }
    }

    /// Column header indicator.
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Unsorted => "⋮",
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

// ===== PageSize =====

/// Allowed page sizes.
pub const PAGE_SIZES: [usize; 5] = [5, 10, 25, 50, 100];

/// Items per page; always one of [`PAGE_SIZES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(usize);

/// A page size outside [`PAGE_SIZES`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid page size {0} (allowed: 5, 10, 25, 50, 100)")]
pub struct InvalidPageSize(pub usize);

impl PageSize {
    /// Smart constructor: only the allowed sizes are accepted.
    pub fn new(size: usize) -> Result<Self, InvalidPageSize> {
        if PAGE_SIZES.contains(&size) {
            Ok(Self(size))
        } else {
            Err(InvalidPageSize(size))
        }
    }

    /// Rows per page.
    pub fn get(self) -> usize {
        self.0
    }

    /// Next larger size, saturating at the largest.
    pub fn larger(self) -> Self {
        let index = self.index();
        Self(PAGE_SIZES[(index + 1).min(PAGE_SIZES.len() - 1)])
    }

    /// Next smaller size, saturating at the smallest.
    pub fn smaller(self) -> Self {
        Self(PAGE_SIZES[self.index().saturating_sub(1)])
    }

    fn index(self) -> usize {
        PAGE_SIZES.iter().position(|&s| s == self.0).unwrap_or(0)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(10)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PageSize {
    type Err = InvalidPageSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let size = s.trim().parse::<usize>().map_err(|_| InvalidPageSize(0))?;
        Self::new(size)
    }
}

// ===== ViewOptions =====

/// Transient view state: which slice of the derived result is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// 1-based page number.
    pub current_page: usize,
    /// Rows per page.
    pub items_per_page: PageSize,
    /// Timestamp ordering.
    pub sort: SortDirection,
}

impl ViewOptions {
    /// Page 1, unsorted.
    pub fn new(items_per_page: PageSize) -> Self {
        Self {
            current_page: 1,
            items_per_page,
            sort: SortDirection::Unsorted,
        }
    }
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}
