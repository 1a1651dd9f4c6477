//! Gateway for the two GitHub endpoints the statistics pipeline consumes.
//!
//! The trait keeps the pipeline independent of the HTTP client so that the
//! pagination and enrichment policies can be tested against scripted
//! responses. The Octocrab implementation performs the real requests.

mod client;
mod error_mapping;
mod http_utils;
mod pull_request;

pub use pull_request::OctocrabGateway;

use async_trait::async_trait;

use crate::github::error::StatsError;
use crate::github::locator::{PullRequestNumber, RepositoryName};
use crate::github::models::{PullRequestDetail, SearchPage};
use crate::github::pagination::PageRequest;
use crate::github::rate_limit::RateLimitStatus;
use crate::github::search_query::SearchQuery;

/// Body of an upstream response after schema validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiBody<T> {
    /// The body matched the expected schema.
    Payload(T),
    /// GitHub answered with an error payload (or a bare error status).
    Error {
        /// The `message` field, or a description of the status.
        message: String,
    },
    /// The body was neither the expected schema nor an error payload.
    Malformed {
        /// Decoder output describing the mismatch.
        detail: String,
    },
}

/// Rate limit classification and decoded body of one upstream call.
///
/// Transport failures never produce a `GatewayResponse`; they are returned
/// as [`StatsError::Network`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayResponse<T> {
    /// Rate limit state read from the response.
    pub rate_limit: RateLimitStatus,
    /// Decoded body.
    pub body: ApiBody<T>,
}

impl<T> GatewayResponse<T> {
    /// A successful response with no rate limit headers.
    #[must_use]
    pub const fn payload(value: T) -> Self {
        Self {
            rate_limit: RateLimitStatus::Unreported,
            body: ApiBody::Payload(value),
        }
    }

    /// Replaces the rate limit classification.
    #[must_use]
    pub const fn with_rate_limit(mut self, rate_limit: RateLimitStatus) -> Self {
        self.rate_limit = rate_limit;
        self
    }
}

/// Gateway that can search for pull requests and load their merge state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PullRequestSearchGateway: Send + Sync {
    /// Fetch one page of search results.
    async fn search_pull_requests(
        &self,
        query: &SearchQuery,
        page: PageRequest,
    ) -> Result<GatewayResponse<SearchPage>, StatsError>;

    /// Fetch the authoritative state of one pull request.
    async fn pull_request_detail(
        &self,
        repository: &RepositoryName,
        number: PullRequestNumber,
    ) -> Result<GatewayResponse<PullRequestDetail>, StatsError>;
}
