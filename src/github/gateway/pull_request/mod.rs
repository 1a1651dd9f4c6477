//! Octocrab implementation of the search gateway.
//!
//! Requests go through `_get_with_headers` rather than the typed helpers so
//! that the rate limit headers of every response stay visible.

use async_trait::async_trait;
use http::Uri;
use octocrab::Octocrab;
use serde::de::DeserializeOwned;

use crate::github::error::StatsError;
use crate::github::locator::{ApiBase, PersonalAccessToken, PullRequestNumber, RepositoryName};
use crate::github::models::{ApiPullRequestDetail, ApiSearchPage, PullRequestDetail, SearchPage};
use crate::github::pagination::PageRequest;
use crate::github::rate_limit::RateLimitStatus;
use crate::github::search_query::SearchQuery;

use super::client::build_octocrab_client;
use super::error_mapping::map_octocrab_error;
use super::http_utils::{decode_body, extract_github_message};
use super::{GatewayResponse, PullRequestSearchGateway};

/// Octocrab-backed gateway.
pub struct OctocrabGateway {
    client: Octocrab,
}

impl OctocrabGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the given token and API base.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::InvalidUrl` when the base URI cannot be parsed or
    /// `StatsError::Configuration` when Octocrab fails to construct a client.
    pub fn for_token(
        token: &PersonalAccessToken,
        api_base: &ApiBase,
        user_agent: &str,
    ) -> Result<Self, StatsError> {
        let octocrab = build_octocrab_client(token, api_base, user_agent)?;
        Ok(Self::new(octocrab))
    }

    async fn fetch<Api, Domain, F>(
        &self,
        operation: &str,
        route: &str,
        convert: F,
    ) -> Result<GatewayResponse<Domain>, StatsError>
    where
        Api: DeserializeOwned + Send,
        F: FnOnce(Api) -> Result<Domain, String> + Send,
    {
        let uri: Uri = route
            .parse::<Uri>()
            .map_err(|error| StatsError::InvalidUrl(error.to_string()))?;

        let response = self
            .client
            ._get_with_headers(uri, None)
            .await
            .map_err(|error| map_octocrab_error(operation, &error))?;

        let status = response.status();
        let headers = response.headers().clone();

        let body = self
            .client
            .body_to_string(response)
            .await
            .map_err(|error| map_octocrab_error(operation, &error))?;

        let message = extract_github_message(&body);
        let rate_limit = RateLimitStatus::inspect(status, &headers, message.as_deref());

        Ok(GatewayResponse {
            rate_limit,
            body: decode_body(status, &body, message, convert),
        })
    }
}

#[async_trait]
impl PullRequestSearchGateway for OctocrabGateway {
    async fn search_pull_requests(
        &self,
        query: &SearchQuery,
        page: PageRequest,
    ) -> Result<GatewayResponse<SearchPage>, StatsError> {
        self.fetch("search pull requests", &query.search_path(page), |api: ApiSearchPage| {
            Ok(api.into())
        })
        .await
    }

    async fn pull_request_detail(
        &self,
        repository: &RepositoryName,
        number: PullRequestNumber,
    ) -> Result<GatewayResponse<PullRequestDetail>, StatsError> {
        self.fetch(
            "pull request",
            &repository.pull_request_path(number),
            |api: ApiPullRequestDetail| PullRequestDetail::try_from(api),
        )
        .await
    }
}
