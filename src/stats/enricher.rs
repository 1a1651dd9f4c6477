//! Detail enrichment: one pull request lookup per search result.

use std::time::Duration;

use crate::github::error::{ItemEnrichmentFailure, StatsError};
use crate::github::gateway::{ApiBody, PullRequestSearchGateway};
use crate::github::locator::{PullRequestNumber, RepositoryName};
use crate::github::models::{EnrichedItem, RawResultItem};
use crate::github::rate_limit::RateLimitStatus;

/// Pause between successful detail lookups.
pub const DEFAULT_PACING_INTERVAL: Duration = Duration::from_millis(100);

/// Result of enriching a single search item.
enum Outcome {
    Enriched(EnrichedItem),
    Skipped(ItemEnrichmentFailure),
}

/// Looks up the merge state of each search result, one at a time.
///
/// Items that cannot be enriched are logged and skipped. Rate limit
/// exhaustion on any lookup aborts the whole batch.
pub struct DetailEnricher<'client, Gateway>
where
    Gateway: PullRequestSearchGateway,
{
    client: &'client Gateway,
    pacing: Duration,
}

impl<'client, Gateway> DetailEnricher<'client, Gateway>
where
    Gateway: PullRequestSearchGateway,
{
    /// Create an enricher that pauses [`DEFAULT_PACING_INTERVAL`] between
    /// successful lookups.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self {
            client,
            pacing: DEFAULT_PACING_INTERVAL,
        }
    }

    /// Replace the pause between successful lookups. Zero disables it.
    #[must_use]
    pub const fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// Enrich `items` sequentially, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::RateLimitExceeded`] as soon as a lookup reports
    /// exhausted quota. Items enriched before that point are discarded.
    pub async fn enrich(&self, items: &[RawResultItem]) -> Result<Vec<EnrichedItem>, StatsError> {
        let mut enriched = Vec::with_capacity(items.len());
        let mut skipped = 0_usize;

        for raw in items {
            match self.enrich_one(raw).await? {
                Outcome::Enriched(item) => {
                    enriched.push(item);
                    self.pause().await;
                }
                Outcome::Skipped(failure) => {
                    tracing::warn!(number = failure.number(), "skipping pull request: {failure}");
                    skipped += 1;
                }
            }
        }

        tracing::info!(enriched = enriched.len(), skipped, "enrichment complete");
        Ok(enriched)
    }

    async fn enrich_one(&self, raw: &RawResultItem) -> Result<Outcome, StatsError> {
        let Some(repository) = RepositoryName::from_repository_url(&raw.repository_url) else {
            return Ok(Outcome::Skipped(ItemEnrichmentFailure::RepositoryReference {
                number: raw.number,
                reference: raw.repository_url.clone(),
            }));
        };

        tracing::debug!(
            repository = %repository.full_name(),
            number = raw.number,
            "fetching pull request detail"
        );

        let response = match self
            .client
            .pull_request_detail(&repository, PullRequestNumber::new(raw.number))
            .await
        {
            Ok(response) => response,
            Err(error @ StatsError::RateLimitExceeded { .. }) => return Err(error),
            Err(source) => {
                return Ok(Outcome::Skipped(ItemEnrichmentFailure::Transport {
                    number: raw.number,
                    source,
                }));
            }
        };

        if let RateLimitStatus::Exhausted(info) = response.rate_limit {
            let error = StatsError::rate_limited(info);
            tracing::error!(number = raw.number, "{error}");
            return Err(error);
        }

        let outcome = match response.body {
            ApiBody::Payload(detail) => {
                Outcome::Enriched(EnrichedItem::new(raw, &repository, detail))
            }
            ApiBody::Error { message } => Outcome::Skipped(ItemEnrichmentFailure::Upstream {
                number: raw.number,
                message,
            }),
            ApiBody::Malformed { detail } => Outcome::Skipped(ItemEnrichmentFailure::Malformed {
                number: raw.number,
                detail,
            }),
        };
        Ok(outcome)
    }

    async fn pause(&self) {
        if !self.pacing.is_zero() {
            tokio::time::sleep(self.pacing).await;
        }
    }
}
