//! Pull request statistics pipeline.
//!
//! A run searches for the pull requests a user opened in one month
//! ([`paginator`]), looks up each one's merge state ([`enricher`]) and counts
//! the results ([`aggregate`]). [`pipeline::MergeStats`] wires the stages
//! together over any [`PullRequestSearchGateway`](crate::github::PullRequestSearchGateway).

pub mod aggregate;
pub mod enricher;
pub mod paginator;
pub mod period;
pub mod pipeline;

pub use aggregate::{RepositoryCounts, StatsSummary};
pub use enricher::{DEFAULT_PACING_INTERVAL, DetailEnricher};
pub use paginator::SearchPaginator;
pub use period::MonthPeriod;
pub use pipeline::{MergeStats, StatsResult};
