//! Data models for the search and pull request endpoints.
//!
//! Types prefixed with `Api` are the declared response schemas; they are
//! decoded at the gateway boundary and converted into the domain types used
//! by the pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::locator::RepositoryName;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Pull request state as reported by the pull request endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PullRequestState {
    /// Still open.
    Open,
    /// Closed, merged or not.
    Closed,
}

impl PullRequestState {
    /// Returns the API value for this state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

/// A pull request found by the search endpoint.
///
/// The search endpoint does not report merge state, so these items are
/// enriched with a second lookup before aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResultItem {
    /// Title of the pull request.
    pub title: String,
    /// Pull request number.
    pub number: u64,
    /// API URL of the owning repository.
    pub repository_url: String,
    /// HTML URL for displaying to a user.
    pub html_url: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    /// Total matches reported by GitHub, which may exceed what it will serve.
    pub total_count: u64,
    /// Whether GitHub timed out before finding every match.
    pub incomplete_results: bool,
    /// Items on this page, in upstream order.
    pub items: Vec<RawResultItem>,
}

/// Authoritative merge state for one pull request.
///
/// Construction goes through [`TryFrom`] on the API schema, which rejects a
/// merged pull request that is not closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullRequestDetail {
    merged: bool,
    state: PullRequestState,
    merged_at: Option<DateTime<Utc>>,
    closed_at: Option<DateTime<Utc>>,
}

impl PullRequestDetail {
    /// Whether the pull request was merged.
    #[must_use]
    pub const fn merged(&self) -> bool {
        self.merged
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> PullRequestState {
        self.state
    }

    /// Merge timestamp, when merged.
    #[must_use]
    pub const fn merged_at(&self) -> Option<DateTime<Utc>> {
        self.merged_at
    }

    /// Close timestamp, when closed.
    #[must_use]
    pub const fn closed_at(&self) -> Option<DateTime<Utc>> {
        self.closed_at
    }
}

/// A pull request with its authoritative merge state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedItem {
    /// Title of the pull request.
    pub title: String,
    /// Pull request number.
    pub number: u64,
    /// Owning repository in `owner/name` form.
    pub repo: String,
    /// Whether the pull request was merged. Implies `state == Closed`.
    pub merged: bool,
    /// Current state.
    pub state: PullRequestState,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Merge timestamp, when merged.
    pub merged_at: Option<DateTime<Utc>>,
    /// Close timestamp, when closed.
    pub closed_at: Option<DateTime<Utc>>,
    /// HTML URL for displaying to a user.
    pub url: String,
}

impl EnrichedItem {
    /// Combines a search result with its detail lookup.
    #[must_use]
    pub fn new(raw: &RawResultItem, repository: &RepositoryName, detail: PullRequestDetail) -> Self {
        Self {
            title: raw.title.clone(),
            number: raw.number,
            repo: repository.full_name(),
            merged: detail.merged,
            state: detail.state,
            created_at: raw.created_at,
            merged_at: detail.merged_at,
            closed_at: detail.closed_at,
            url: raw.html_url.clone(),
        }
    }

    /// Closed without being merged.
    #[must_use]
    pub fn is_closed_unmerged(&self) -> bool {
        !self.merged && self.state == PullRequestState::Closed
    }
}

/// API response type for `GET /search/issues`.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiSearchPage {
    pub(super) total_count: u64,
    #[serde(default)]
    pub(super) incomplete_results: bool,
    pub(super) items: Vec<ApiSearchItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiSearchItem {
    pub(super) title: String,
    pub(super) number: u64,
    pub(super) repository_url: String,
    pub(super) html_url: String,
    pub(super) created_at: DateTime<Utc>,
}

/// API response type for `GET /repos/{owner}/{repo}/pulls/{number}`.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiPullRequestDetail {
    #[serde(default)]
    pub(super) merged: Option<bool>,
    pub(super) state: PullRequestState,
    #[serde(default)]
    pub(super) merged_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub(super) closed_at: Option<DateTime<Utc>>,
}

impl From<ApiSearchItem> for RawResultItem {
    fn from(value: ApiSearchItem) -> Self {
        Self {
            title: value.title,
            number: value.number,
            repository_url: value.repository_url,
            html_url: value.html_url,
            created_at: value.created_at,
        }
    }
}

impl From<ApiSearchPage> for SearchPage {
    fn from(value: ApiSearchPage) -> Self {
        Self {
            total_count: value.total_count,
            incomplete_results: value.incomplete_results,
            items: value.items.into_iter().map(ApiSearchItem::into).collect(),
        }
    }
}

impl TryFrom<ApiPullRequestDetail> for PullRequestDetail {
    type Error = String;

    fn try_from(value: ApiPullRequestDetail) -> Result<Self, Self::Error> {
        let merged = value.merged == Some(true);
        if merged && value.state != PullRequestState::Closed {
            return Err(format!(
                "merged pull request reported as {}",
                value.state.as_str()
            ));
        }

        Ok(Self {
            merged,
            state: value.state,
            merged_at: value.merged_at,
            closed_at: value.closed_at,
        })
    }
}
