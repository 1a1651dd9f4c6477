//! Test helpers for constructing search and enrichment fixtures.
//!
//! # Examples
//!
//! ```
//! use mergestats::github::models::test_support::{enriched_item, raw_item};
//!
//! let raw = raw_item(7, "octo/cat");
//! assert_eq!(raw.repository_url, "https://api.github.com/repos/octo/cat");
//!
//! let merged = enriched_item(7, "octo/cat", true);
//! assert!(merged.merged);
//! ```

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Value, json};

use super::{EnrichedItem, PullRequestDetail, PullRequestState, RawResultItem};

/// Creation time shared by all fixtures: 2024-03-02T10:00:00Z.
#[must_use]
pub fn fixture_created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 2, 10, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Builds a search result for `repo` (in `owner/name` form).
#[must_use]
pub fn raw_item(number: u64, repo: &str) -> RawResultItem {
    RawResultItem {
        title: format!("PR #{number}"),
        number,
        repository_url: format!("https://api.github.com/repos/{repo}"),
        html_url: format!("https://github.com/{repo}/pull/{number}"),
        created_at: fixture_created_at(),
    }
}

/// Builds an enriched item; merged items are closed, others open.
#[must_use]
pub fn enriched_item(number: u64, repo: &str, merged: bool) -> EnrichedItem {
    let state = if merged {
        PullRequestState::Closed
    } else {
        PullRequestState::Open
    };
    enriched_item_with_state(number, repo, merged, state)
}

/// Builds an enriched item with an explicit state.
///
/// Callers are responsible for keeping `merged` implying `Closed`.
#[must_use]
pub fn enriched_item_with_state(
    number: u64,
    repo: &str,
    merged: bool,
    state: PullRequestState,
) -> EnrichedItem {
    let closed_at = (state == PullRequestState::Closed).then(fixture_created_at);
    EnrichedItem {
        title: format!("PR #{number}"),
        number,
        repo: repo.to_owned(),
        merged,
        state,
        created_at: fixture_created_at(),
        merged_at: merged.then(fixture_created_at),
        closed_at,
        url: format!("https://github.com/{repo}/pull/{number}"),
    }
}

/// Builds a consistent detail record.
#[must_use]
pub fn detail(merged: bool, state: PullRequestState) -> PullRequestDetail {
    PullRequestDetail {
        merged,
        state,
        merged_at: merged.then(fixture_created_at),
        closed_at: (state == PullRequestState::Closed).then(fixture_created_at),
    }
}

/// JSON for one search result as served by `GET /search/issues`.
#[must_use]
pub fn search_item_json(api_base: &str, number: u64, repo: &str) -> Value {
    json!({
        "title": format!("PR #{number}"),
        "number": number,
        "repository_url": format!("{api_base}/repos/{repo}"),
        "html_url": format!("https://github.com/{repo}/pull/{number}"),
        "created_at": "2024-03-02T10:00:00Z",
        "state": "open",
        "pull_request": { "url": format!("{api_base}/repos/{repo}/pulls/{number}") }
    })
}

/// JSON for a search page holding `items`.
#[must_use]
pub fn search_page_json(total_count: u64, items: Vec<Value>) -> Value {
    json!({
        "total_count": total_count,
        "incomplete_results": false,
        "items": items
    })
}

/// JSON for `GET /repos/{owner}/{repo}/pulls/{number}`.
#[must_use]
pub fn detail_json(number: u64, merged: bool, state: PullRequestState) -> Value {
    let closed = state == PullRequestState::Closed;
    json!({
        "number": number,
        "merged": merged,
        "state": state.as_str(),
        "merged_at": merged.then_some("2024-03-03T10:00:00Z"),
        "closed_at": closed.then_some("2024-03-03T10:00:00Z")
    })
}
