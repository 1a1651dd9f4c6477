//! Error types exposed by the GitHub statistics layer.

use chrono::NaiveDate;
use thiserror::Error;

use super::rate_limit::RateLimitInfo;

/// Errors surfaced while validating input or communicating with GitHub.
///
/// Variants that reach the caller of a pipeline run are fatal for that run.
/// Item-level problems during enrichment are reported separately through
/// [`ItemEnrichmentFailure`] and never abort a batch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StatsError {
    /// The username is blank or not a valid GitHub login.
    #[error("invalid username: {message}")]
    InvalidUsername {
        /// Why the username was rejected.
        message: String,
    },

    /// The month is outside `1..=12`.
    #[error("invalid month {month}: please enter a number between 1 and 12")]
    InvalidMonth {
        /// The rejected month value.
        month: u32,
    },

    /// The year is before 2000 or after the current year.
    #[error("invalid year {year}: must be between 2000 and {latest}")]
    InvalidYear {
        /// The rejected year value.
        year: i32,
        /// The latest accepted year.
        latest: i32,
    },

    /// The authentication token was missing.
    #[error("personal access token is required")]
    MissingToken,

    /// A URL could not be parsed.
    #[error("URL is invalid: {0}")]
    InvalidUrl(String),

    /// The date range ends before it starts.
    #[error("invalid date range: {end} is before {start}")]
    InvalidDateRange {
        /// First day of the rejected range.
        start: NaiveDate,
        /// Last day of the rejected range.
        end: NaiveDate,
    },

    /// Invalid pagination parameters.
    #[error("invalid pagination: {message}")]
    InvalidPagination {
        /// Description of the invalid parameter.
        message: String,
    },

    /// The API quota is exhausted; the run stops until the reset time.
    #[error("GitHub API rate limit exceeded; try again after {resets_at}")]
    RateLimitExceeded {
        /// Snapshot taken from the response that reported exhaustion.
        rate_limit: RateLimitInfo,
        /// Human-readable reset time.
        resets_at: String,
    },

    /// GitHub understood the request but answered with an error payload.
    #[error("GitHub API error: {message}")]
    Upstream {
        /// Message returned by GitHub.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}

impl StatsError {
    /// Builds a rate limit error with a rendered reset time.
    #[must_use]
    pub fn rate_limited(rate_limit: RateLimitInfo) -> Self {
        Self::RateLimitExceeded {
            resets_at: rate_limit.reset_time_display(),
            rate_limit,
        }
    }
}

/// A single pull request that could not be enriched.
///
/// These failures are logged and the item is dropped from the output.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ItemEnrichmentFailure {
    /// The repository reference on the search item could not be resolved.
    #[error("pull request #{number}: unrecognised repository reference `{reference}`")]
    RepositoryReference {
        /// Pull request number.
        number: u64,
        /// The reference as returned by the search API.
        reference: String,
    },

    /// The detail lookup returned an error payload.
    #[error("pull request #{number}: {message}")]
    Upstream {
        /// Pull request number.
        number: u64,
        /// Message returned by GitHub.
        message: String,
    },

    /// The detail lookup body did not match the expected schema.
    #[error("pull request #{number}: malformed detail response: {detail}")]
    Malformed {
        /// Pull request number.
        number: u64,
        /// Decoder output.
        detail: String,
    },

    /// The detail lookup failed in transit.
    #[error("pull request #{number}: {source}")]
    Transport {
        /// Pull request number.
        number: u64,
        /// Underlying error.
        source: StatsError,
    },
}

impl ItemEnrichmentFailure {
    /// Number of the pull request that failed.
    #[must_use]
    pub const fn number(&self) -> u64 {
        match self {
            Self::RepositoryReference { number, .. }
            | Self::Upstream { number, .. }
            | Self::Malformed { number, .. }
            | Self::Transport { number, .. } => *number,
        }
    }
}
