//! Page requests for the GitHub search API.
//!
//! The search endpoint is page-numbered (1-based) with at most 100 results
//! per page and never serves more than [`SEARCH_RESULT_CEILING`] results for
//! one query, so a query spans at most [`MAX_SEARCH_PAGES`] pages.

use super::error::StatsError;

/// Largest page size the search endpoint accepts.
pub const MAX_PER_PAGE: u8 = 100;

/// Total results the search endpoint will serve for a single query.
pub const SEARCH_RESULT_CEILING: u32 = 1000;

/// Pages needed to reach the ceiling at the maximum page size.
pub const MAX_SEARCH_PAGES: u32 = 10;

/// One page of a paginated search.
///
/// # Example
///
/// ```
/// use mergestats::github::pagination::PageRequest;
///
/// let first = PageRequest::first(100).expect("valid page size");
/// let second = first.next();
/// assert_eq!(second.page(), 2);
/// assert_eq!(second.per_page(), 100);
/// assert!(!second.is_first_page());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number (1-based).
    page: u32,
    /// Items per page.
    per_page: u8,
}

impl PageRequest {
    /// Creates a validated page request.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidPagination`] when `page` is zero or
    /// `per_page` is outside `1..=100`.
    pub fn new(page: u32, per_page: u8) -> Result<Self, StatsError> {
        if page == 0 {
            return Err(StatsError::InvalidPagination {
                message: "page must be at least 1".to_owned(),
            });
        }

        if per_page == 0 {
            return Err(StatsError::InvalidPagination {
                message: "per_page must be at least 1".to_owned(),
            });
        }

        if per_page > MAX_PER_PAGE {
            return Err(StatsError::InvalidPagination {
                message: format!("per_page must not exceed {MAX_PER_PAGE}"),
            });
        }

        Ok(Self { page, per_page })
    }

    /// First page with the given page size.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidPagination`] for an invalid page size.
    pub fn first(per_page: u8) -> Result<Self, StatsError> {
        Self::new(1, per_page)
    }

    /// The page after this one, with the same page size.
    #[must_use]
    pub const fn next(self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            per_page: self.per_page,
        }
    }

    /// Returns the page number (1-based).
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Returns the number of items per page.
    #[must_use]
    pub const fn per_page(&self) -> u8 {
        self.per_page
    }

    /// Returns true if this is the first page.
    #[must_use]
    pub const fn is_first_page(&self) -> bool {
        self.page == 1
    }

    /// Returns true when a page holding `received` items was full.
    #[must_use]
    pub fn is_full(&self, received: usize) -> bool {
        received == usize::from(self.per_page)
    }
}
