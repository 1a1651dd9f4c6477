//! Error mapping helpers for the Octocrab gateway.

use crate::github::error::StatsError;

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> StatsError {
    if let octocrab::Error::GitHub { source, .. } = error {
        return StatsError::Upstream {
            message: format!(
                "{operation} failed with status {status}: {message}",
                status = source.status_code,
                message = source.message
            ),
        };
    }

    if is_network_error(error) {
        return StatsError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    StatsError::Upstream {
        message: format!("{operation} failed: {error}"),
    }
}
