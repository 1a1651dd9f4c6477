//! Octocrab client construction for the gateway.

use http::Uri;
use http::header::USER_AGENT;
use octocrab::Octocrab;
use octocrab::service::middleware::retry::RetryConfig;

use crate::github::error::StatsError;
use crate::github::locator::{ApiBase, PersonalAccessToken};

use super::error_mapping::map_octocrab_error;

/// Builds an Octocrab client for the given token, API base URL and
/// `User-Agent` value.
///
/// Octocrab's transport retry is disabled: a failed request reaches the
/// pipeline exactly once.
///
/// # Errors
///
/// Returns `StatsError::InvalidUrl` when the base URI cannot be parsed or
/// `StatsError::Configuration` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: &PersonalAccessToken,
    api_base: &ApiBase,
    user_agent: &str,
) -> Result<Octocrab, StatsError> {
    let base_uri: Uri = api_base
        .as_str()
        .parse::<Uri>()
        .map_err(|error| StatsError::InvalidUrl(error.to_string()))?;

    Octocrab::builder()
        .personal_token(token.as_ref())
        .add_header(USER_AGENT, user_agent.to_owned())
        .add_retry_config(RetryConfig::None)
        .base_uri(base_uri)
        .map_err(|error| StatsError::Configuration {
            message: format!("build client failed: {error}"),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
