//! Summary counts over enriched pull requests.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::github::models::{EnrichedItem, PullRequestState};

/// Pull request counts for one repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RepositoryCounts {
    /// Pull requests opened in the repository.
    pub total: u64,
    /// Of those, how many were merged.
    pub merged: u64,
}

/// Aggregate counts for a set of pull requests.
///
/// `merged_prs + closed_prs + open_prs == total_prs` holds for every summary
/// built by [`StatsSummary::from_items`], because a merged pull request is
/// always closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatsSummary {
    /// All pull requests.
    #[serde(rename = "totalPRs")]
    pub total_prs: u64,
    /// Merged pull requests.
    #[serde(rename = "mergedPRs")]
    pub merged_prs: u64,
    /// Pull requests closed without being merged.
    #[serde(rename = "closedPRs")]
    pub closed_prs: u64,
    /// Pull requests still open.
    #[serde(rename = "openPRs")]
    pub open_prs: u64,
    /// Counts keyed by `owner/name`.
    pub repos: BTreeMap<String, RepositoryCounts>,
}

impl StatsSummary {
    /// Count `items`.
    ///
    /// # Example
    ///
    /// ```
    /// use mergestats::github::models::test_support::enriched_item;
    /// use mergestats::stats::StatsSummary;
    ///
    /// let summary = StatsSummary::from_items(&[
    ///     enriched_item(1, "org/repoA", true),
    ///     enriched_item(2, "org/repoA", false),
    /// ]);
    /// assert_eq!(summary.total_prs, 2);
    /// assert_eq!(summary.merged_prs, 1);
    /// assert_eq!(summary.open_prs, 1);
    /// ```
    #[must_use]
    pub fn from_items(items: &[EnrichedItem]) -> Self {
        items.iter().fold(Self::default(), |mut summary, item| {
            summary.total_prs += 1;
            if item.merged {
                summary.merged_prs += 1;
            } else if item.is_closed_unmerged() {
                summary.closed_prs += 1;
            }
            if item.state == PullRequestState::Open {
                summary.open_prs += 1;
            }

            let counts = summary.repos.entry(item.repo.clone()).or_default();
            counts.total += 1;
            if item.merged {
                counts.merged += 1;
            }
            summary
        })
    }

    /// Merged pull requests as a rounded percentage of the total.
    ///
    /// Returns 0 for an empty summary.
    #[must_use]
    pub fn merge_rate_percent(&self) -> u64 {
        let scaled = self
            .merged_prs
            .saturating_mul(200)
            .saturating_add(self.total_prs);
        scaled
            .checked_div(self.total_prs.saturating_mul(2))
            .unwrap_or_default()
    }
}
