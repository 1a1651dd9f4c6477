//! Mergestats CLI entrypoint: monthly pull request statistics.

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use mergestats::{MergeStats, MergeStatsConfig, OctocrabGateway, PersonalAccessToken, StatsError};
use ortho_config::OrthoConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            writeln!(io::stderr().lock(), "{error}").ok();
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so that stdout carries only the report.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mergestats=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn run() -> Result<(), StatsError> {
    let config = load_config()?;

    let username = config.require_username()?;
    let (year, month) = config.require_year_month()?;
    let token = PersonalAccessToken::new(config.resolve_token()?)?;
    let api_base = config.api_base()?;

    let gateway = OctocrabGateway::for_token(&token, &api_base, &config.user_agent)?;
    let result = MergeStats::new(&gateway, config.pacing_interval())
        .compute_stats(username, year, month)
        .await?;

    cli::output::write_result(&result, config.json)
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`StatsError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<MergeStatsConfig, StatsError> {
    MergeStatsConfig::load().map_err(|error| StatsError::Configuration {
        message: error.to_string(),
    })
}
