//! Wiremock helpers for the statistics pipeline BDD tests.

use wiremock::{Mock, MockServer};

use super::runtime::SharedRuntime;
use super::state::PipelineState;

pub(crate) const EXPECTED_RATE_LIMIT_RESET_AT: u64 = 1_700_000_000;

/// Mounts `mock` on the scenario's server.
pub(crate) fn mount(state: &PipelineState, runtime: &SharedRuntime, mock: Mock) {
    state
        .server
        .with_ref(|server: &MockServer| {
            runtime.block_on(mock.mount(server));
        })
        .unwrap_or_else(|| panic!("mock server not initialised"));
}

/// Parses a comma-separated list of pull request numbers.
pub(crate) fn parse_numbers(list: &str) -> Vec<u64> {
    list.split(',')
        .map(|part| {
            part.trim()
                .parse::<u64>()
                .unwrap_or_else(|error| panic!("invalid pull request number `{part}`: {error}"))
        })
        .collect()
}
