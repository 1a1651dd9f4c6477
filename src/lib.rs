//! Mergestats library crate: monthly pull request statistics for a GitHub
//! user.
//!
//! The library searches GitHub for the pull requests a user opened in one
//! calendar month, looks up whether each was merged, and summarises the
//! results overall and per repository. Rate limit exhaustion and upstream
//! failures surface as friendly errors that can be displayed in the CLI.

pub mod config;
pub mod github;
pub mod stats;

pub use config::MergeStatsConfig;
pub use github::{
    ApiBase, OctocrabGateway, PersonalAccessToken, PullRequestSearchGateway, StatsError, Username,
};
pub use stats::{MergeStats, StatsResult, StatsSummary};
