//! Search paginator: collects every search result for one query.

use crate::github::error::StatsError;
use crate::github::gateway::{ApiBody, PullRequestSearchGateway};
use crate::github::models::RawResultItem;
use crate::github::pagination::{MAX_PER_PAGE, MAX_SEARCH_PAGES, PageRequest, SEARCH_RESULT_CEILING};
use crate::github::rate_limit::RateLimitStatus;
use crate::github::search_query::SearchQuery;

/// Walks the search pages for a query, in order, until they run out.
///
/// Fetching stops at the first empty or short page, or after
/// [`MAX_SEARCH_PAGES`] full pages. GitHub never serves more than
/// [`SEARCH_RESULT_CEILING`] results for one query, so anything beyond that
/// is dropped. Rate limit exhaustion and error payloads end the walk with an
/// error; nothing is retried.
pub struct SearchPaginator<'client, Gateway>
where
    Gateway: PullRequestSearchGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> SearchPaginator<'client, Gateway>
where
    Gateway: PullRequestSearchGateway,
{
    /// Create a paginator over the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Collect all search results for `query` in upstream order.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::RateLimitExceeded`] when a page reports no
    /// remaining quota, [`StatsError::Upstream`] when a page carries an error
    /// payload or does not match the search schema, and any transport error
    /// from the gateway unchanged.
    pub async fn collect(&self, query: &SearchQuery) -> Result<Vec<RawResultItem>, StatsError> {
        let mut collected: Vec<RawResultItem> = Vec::new();
        let mut request = PageRequest::first(MAX_PER_PAGE)?;

        loop {
            tracing::info!(page = request.page(), "fetching search page");
            let response = self.client.search_pull_requests(query, request).await?;

            if let RateLimitStatus::Exhausted(info) = response.rate_limit {
                let error = StatsError::rate_limited(info);
                tracing::error!("{error}");
                return Err(error);
            }

            let page = match response.body {
                ApiBody::Payload(page) => page,
                ApiBody::Error { message } => {
                    tracing::error!("search failed: {message}");
                    return Err(StatsError::Upstream { message });
                }
                ApiBody::Malformed { detail } => {
                    return Err(StatsError::Upstream {
                        message: format!("unexpected search response: {detail}"),
                    });
                }
            };

            if request.is_first_page() {
                log_result_shape(query, page.total_count, page.incomplete_results);
            }

            if page.items.is_empty() {
                break;
            }

            let full = request.is_full(page.items.len());
            collected.extend(page.items);

            if !full || request.page() >= MAX_SEARCH_PAGES {
                break;
            }
            request = request.next();
        }

        tracing::info!(count = collected.len(), "search complete");
        Ok(collected)
    }
}

fn log_result_shape(query: &SearchQuery, total_count: u64, incomplete_results: bool) {
    if total_count == 0 {
        tracing::info!(
            author = query.author().as_str(),
            "no pull requests found in {}..{}",
            query.start(),
            query.end()
        );
    }
    if total_count > u64::from(SEARCH_RESULT_CEILING) {
        tracing::warn!(
            total_count,
            "search matched more pull requests than GitHub will return; \
             only the first {SEARCH_RESULT_CEILING} are counted"
        );
    }
    if incomplete_results {
        tracing::warn!("GitHub reported incomplete search results");
    }
}
