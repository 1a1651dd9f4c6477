//! End-to-end statistics for one user and one month.

use std::time::Duration;

use serde::Serialize;

use super::aggregate::StatsSummary;
use super::enricher::DetailEnricher;
use super::paginator::SearchPaginator;
use super::period::MonthPeriod;
use crate::github::error::StatsError;
use crate::github::gateway::PullRequestSearchGateway;
use crate::github::locator::Username;
use crate::github::models::EnrichedItem;
use crate::github::search_query::SearchQuery;

/// Pull request statistics for a user in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsResult {
    /// GitHub login the statistics were computed for.
    pub username: String,
    /// The month, as `MM/YYYY`.
    pub period: String,
    /// Aggregate counts.
    pub stats: StatsSummary,
    /// Enriched pull requests in search order.
    pub items: Vec<EnrichedItem>,
}

impl StatsResult {
    fn empty(username: &Username, period: &MonthPeriod) -> Self {
        Self {
            username: username.as_str().to_owned(),
            period: period.label(),
            stats: StatsSummary::default(),
            items: Vec::new(),
        }
    }
}

/// Runs search, enrichment and aggregation against a gateway.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
///
/// use mergestats::github::{ApiBase, OctocrabGateway, PersonalAccessToken};
/// use mergestats::stats::MergeStats;
///
/// # async fn run() -> Result<(), mergestats::github::StatsError> {
/// let token = PersonalAccessToken::new("ghp_example")?;
/// let gateway = OctocrabGateway::for_token(&token, &ApiBase::default(), "mergestats")?;
/// let result = MergeStats::new(&gateway, Duration::from_millis(100))
///     .compute_stats("octocat", 2024, 3)
///     .await?;
/// println!("{} merged", result.stats.merged_prs);
/// # Ok(())
/// # }
/// ```
pub struct MergeStats<'client, Gateway>
where
    Gateway: PullRequestSearchGateway,
{
    client: &'client Gateway,
    pacing: Duration,
}

impl<'client, Gateway> MergeStats<'client, Gateway>
where
    Gateway: PullRequestSearchGateway,
{
    /// Create a pipeline that pauses `pacing` between detail lookups.
    #[must_use]
    pub const fn new(client: &'client Gateway, pacing: Duration) -> Self {
        Self { client, pacing }
    }

    /// Compute statistics for `username` in `month` of `year`.
    ///
    /// Inputs are validated against the current UTC year before any request
    /// is made.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a bad login, month or year, and
    /// otherwise any error from [`MergeStats::compute_for_period`].
    pub async fn compute_stats(
        &self,
        username: &str,
        year: i32,
        month: u32,
    ) -> Result<StatsResult, StatsError> {
        let login = Username::new(username)?;
        let period = MonthPeriod::for_current_year(year, month)?;
        self.compute_for_period(&login, &period).await
    }

    /// Compute statistics for an already validated login and period.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::RateLimitExceeded`] when quota runs out during
    /// search or enrichment, [`StatsError::Upstream`] when the search fails,
    /// and [`StatsError::Network`] when a search page cannot be fetched.
    pub async fn compute_for_period(
        &self,
        username: &Username,
        period: &MonthPeriod,
    ) -> Result<StatsResult, StatsError> {
        let query = SearchQuery::new(username.clone(), period.start(), period.end())?;
        tracing::info!(
            username = username.as_str(),
            period = %period.label(),
            "computing pull request statistics"
        );

        let raw = SearchPaginator::new(self.client).collect(&query).await?;
        if raw.is_empty() {
            return Ok(StatsResult::empty(username, period));
        }

        let items = DetailEnricher::new(self.client)
            .with_pacing(self.pacing)
            .enrich(&raw)
            .await?;
        let stats = StatsSummary::from_items(&items);

        Ok(StatsResult {
            username: username.as_str().to_owned(),
            period: period.label(),
            stats,
            items,
        })
    }
}
