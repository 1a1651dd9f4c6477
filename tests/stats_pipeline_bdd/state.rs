//! Scenario state and runtime/server initialisation for the statistics
//! pipeline BDD tests.

use std::time::Duration;

use mergestats::github::models::test_support::search_page_json;
use mergestats::{
    ApiBase, MergeStats, OctocrabGateway, PersonalAccessToken, StatsError, StatsResult,
};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::harness::mount;
use super::runtime::{self, SharedRuntime};

#[derive(ScenarioState, Default)]
pub(crate) struct PipelineState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) search_items: Slot<Vec<Value>>,
    pub(crate) search_mocked: Slot<bool>,
    pub(crate) result: Slot<StatsResult>,
    pub(crate) error: Slot<StatsError>,
}

/// Ensures the runtime and server are initialised in `PipelineState`.
pub(crate) fn ensure_runtime_and_server(state: &PipelineState) -> SharedRuntime {
    runtime::ensure_runtime_and_server(&state.runtime, &state.server)
        .unwrap_or_else(|error| panic!("failed to initialise runtime: {error}"))
}

/// Returns the mock server's base URL.
pub(crate) fn server_uri(state: &PipelineState) -> String {
    state
        .server
        .with_ref(MockServer::uri)
        .unwrap_or_else(|| panic!("mock server URL missing"))
}

/// Records a search result to be served when the pipeline runs.
pub(crate) fn push_search_item(state: &PipelineState, item: Value) {
    let mut items = state.search_items.take().unwrap_or_default();
    items.push(item);
    state.search_items.set(items);
}

/// Serves the recorded search results and runs the pipeline.
pub(crate) fn run_pipeline(
    state: &PipelineState,
    username: &str,
    year: i32,
    month: u32,
) -> Result<StatsResult, StatsError> {
    let shared_runtime = ensure_runtime_and_server(state);
    let api_base = server_uri(state);

    if state.search_mocked.get() != Some(true) {
        let items = state.search_items.get().unwrap_or_default();
        let total = u64::try_from(items.len()).unwrap_or(u64::MAX);
        let search = Mock::given(method("GET"))
            .and(path("/search/issues"))
            .respond_with(ResponseTemplate::new(200).set_body_json(search_page_json(total, items)));
        mount(state, &shared_runtime, search);
    }

    shared_runtime.block_on(async {
        let token = PersonalAccessToken::new("ghp_example")?;
        let base = ApiBase::parse(&api_base)?;
        let gateway = OctocrabGateway::for_token(&token, &base, "mergestats-bdd")?;
        MergeStats::new(&gateway, Duration::ZERO)
            .compute_stats(username, year, month)
            .await
    })
}
