//! The pull request search query for one author and date range.

use chrono::NaiveDate;
use url::form_urlencoded;

use super::error::StatsError;
use super::locator::Username;
use super::pagination::PageRequest;

/// Search for pull requests authored by one user within an inclusive range
/// of calendar days.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use mergestats::github::locator::Username;
/// use mergestats::github::search_query::SearchQuery;
///
/// let query = SearchQuery::new(
///     Username::new("octocat").expect("valid login"),
///     NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date"),
///     NaiveDate::from_ymd_opt(2024, 3, 31).expect("valid date"),
/// )
/// .expect("valid range");
/// assert_eq!(
///     query.qualifiers(),
///     "type:pr author:octocat created:2024-03-01..2024-03-31"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    author: Username,
    start: NaiveDate,
    end: NaiveDate,
}

impl SearchQuery {
    /// Creates a query for `author` between `start` and `end`, inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidDateRange`] when `end` precedes `start`.
    pub fn new(author: Username, start: NaiveDate, end: NaiveDate) -> Result<Self, StatsError> {
        if end < start {
            return Err(StatsError::InvalidDateRange { start, end });
        }
        Ok(Self { author, start, end })
    }

    /// The author being searched for.
    #[must_use]
    pub const fn author(&self) -> &Username {
        &self.author
    }

    /// First day of the range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// The `q` parameter value, before URL encoding.
    #[must_use]
    pub fn qualifiers(&self) -> String {
        format!(
            "type:pr author:{} created:{}..{}",
            self.author.as_str(),
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }

    pub(crate) fn search_path(&self, page: PageRequest) -> String {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .append_pair("q", &self.qualifiers())
            .append_pair("per_page", &page.per_page().to_string())
            .append_pair("page", &page.page().to_string())
            .finish();
        format!("/search/issues?{encoded}")
    }
}
