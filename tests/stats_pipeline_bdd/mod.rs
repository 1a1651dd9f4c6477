//! Support modules for the statistics pipeline BDD tests.

pub(crate) mod harness;
#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use harness::{EXPECTED_RATE_LIMIT_RESET_AT, mount, parse_numbers};
pub(crate) use state::{
    PipelineState, ensure_runtime_and_server, push_search_item, run_pipeline, server_uri,
};
