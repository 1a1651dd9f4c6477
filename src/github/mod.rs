//! GitHub access for pull request statistics.
//!
//! This module wraps Octocrab to search for the pull requests a user authored
//! in a date range and to load each one's authoritative merge state. Every
//! response is classified for rate limit exhaustion and decoded against a
//! declared schema, so the pipeline never sees raw JSON.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod pagination;
pub mod rate_limit;
pub mod search_query;

pub use error::{ItemEnrichmentFailure, StatsError};
pub use gateway::{ApiBody, GatewayResponse, OctocrabGateway, PullRequestSearchGateway};
pub use locator::{ApiBase, PersonalAccessToken, PullRequestNumber, RepositoryName, Username};
pub use models::{EnrichedItem, PullRequestDetail, PullRequestState, RawResultItem, SearchPage};
pub use pagination::PageRequest;
pub use rate_limit::{RateLimitInfo, RateLimitStatus};
pub use search_query::SearchQuery;

#[cfg(test)]
pub use gateway::MockPullRequestSearchGateway;

#[cfg(test)]
mod tests;
