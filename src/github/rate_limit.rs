//! Rate limit information from GitHub API responses.
//!
//! Every response from the search and pull request endpoints carries
//! `X-RateLimit-*` headers. [`RateLimitStatus::inspect`] turns those headers
//! (and, for secondary limits, the status code and error message) into a
//! tagged result so that each pipeline stage can apply its own policy.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::DateTime;
use http::header::{HeaderMap, RETRY_AFTER};
use http::StatusCode;

const LIMIT_HEADER: &str = "x-ratelimit-limit";
const REMAINING_HEADER: &str = "x-ratelimit-remaining";
const RESET_HEADER: &str = "x-ratelimit-reset";

/// Rate limit information extracted from GitHub API response headers.
///
/// # Example
///
/// ```
/// use mergestats::github::rate_limit::RateLimitInfo;
///
/// let info = RateLimitInfo::new(5000, 4999, 1700000000);
/// assert!(!info.is_exhausted());
/// assert_eq!(info.remaining(), 4999);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Maximum requests allowed in the current window.
    limit: u32,
    /// Remaining requests in the current window.
    remaining: u32,
    /// Unix timestamp when the rate limit resets.
    reset_at: u64,
}

impl RateLimitInfo {
    /// Creates a new rate limit info instance.
    #[must_use]
    pub const fn new(limit: u32, remaining: u32, reset_at: u64) -> Self {
        Self {
            limit,
            remaining,
            reset_at,
        }
    }

    /// Reads the rate limit headers from a response.
    ///
    /// Returns `None` unless `X-RateLimit-Remaining` is present and numeric.
    /// A missing limit defaults to zero and a missing reset to the epoch.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let remaining = header_number::<u32>(headers, REMAINING_HEADER)?;
        let limit = header_number::<u32>(headers, LIMIT_HEADER).unwrap_or(0);
        let reset_at = header_number::<u64>(headers, RESET_HEADER).unwrap_or(0);
        Some(Self::new(limit, remaining, reset_at))
    }

    /// Returns the maximum requests allowed in the current window.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Returns the remaining requests in the current window.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Returns the Unix timestamp when the rate limit resets.
    #[must_use]
    pub const fn reset_at(&self) -> u64 {
        self.reset_at
    }

    /// Returns true if the rate limit has been exhausted.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Renders the reset time as `YYYY-MM-DD HH:MM:SS UTC`.
    ///
    /// Falls back to the raw timestamp when it is out of range.
    #[must_use]
    pub fn reset_time_display(&self) -> String {
        i64::try_from(self.reset_at)
            .ok()
            .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
            .map_or_else(
                || format!("Unix time {}", self.reset_at),
                |reset| reset.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            )
    }
}

/// Classification of a single response's rate limit state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitStatus {
    /// The response carried no rate limit headers.
    Unreported,
    /// Quota remains.
    Available(RateLimitInfo),
    /// Quota is exhausted; the caller decides whether that is fatal.
    Exhausted(RateLimitInfo),
}

impl RateLimitStatus {
    /// Classifies a response from its headers alone.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        match RateLimitInfo::from_headers(headers) {
            Some(info) if info.is_exhausted() => Self::Exhausted(info),
            Some(info) => Self::Available(info),
            None => Self::Unreported,
        }
    }

    /// Classifies a response, also recognising secondary rate limits.
    ///
    /// GitHub reports secondary limits as `403` or `429` with a message that
    /// mentions the rate limit while `X-RateLimit-Remaining` may still be
    /// non-zero. Those are treated as exhausted, with the reset taken from
    /// `X-RateLimit-Reset`, then `Retry-After`, then the current time.
    #[must_use]
    pub fn inspect(status: StatusCode, headers: &HeaderMap, message: Option<&str>) -> Self {
        let from_headers = Self::from_headers(headers);
        if matches!(from_headers, Self::Exhausted(_)) || !is_secondary_limit(status, message) {
            return from_headers;
        }

        let info = RateLimitInfo::from_headers(headers);
        let reset_at = info
            .map(|snapshot| snapshot.reset_at())
            .filter(|reset| *reset > 0)
            .or_else(|| {
                header_number::<u64>(headers, RETRY_AFTER.as_str())
                    .map(|delay| now_unix_seconds().saturating_add(delay))
            })
            .unwrap_or_else(now_unix_seconds);
        let limit = info.map_or(0, |snapshot| snapshot.limit());

        Self::Exhausted(RateLimitInfo::new(limit, 0, reset_at))
    }
}

fn is_secondary_limit(status: StatusCode, message: Option<&str>) -> bool {
    matches!(status, StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS)
        && message.is_some_and(|text| text.to_lowercase().contains("rate limit"))
}

fn header_number<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<T>().ok())
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs())
        .unwrap_or(0)
}
