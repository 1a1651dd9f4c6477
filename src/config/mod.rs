//! Application configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.mergestats.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `MERGESTATS_USERNAME`, `MERGESTATS_TOKEN`,
//!    and so on, or `GITHUB_TOKEN` for the token
//! 4. **Command-line arguments** – `--username`/`-u`, `--year`/`-y`,
//!    `--month`/`-m`, `--token`/`-t`
//!
//! # Configuration File
//!
//! ```toml
//! username = "octocat"
//! year = 2024
//! month = 3
//! token = "ghp_example"
//! api_base = "https://github.example.com/api/v3"
//! pacing_interval_ms = 250
//! ```

use std::env;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::StatsError;
use crate::github::locator::{ApiBase, DEFAULT_API_BASE};

/// User agent sent with every GitHub request unless overridden.
pub const DEFAULT_USER_AGENT: &str = "mergestats";

/// Default pause between pull request detail lookups, in milliseconds.
pub const DEFAULT_PACING_INTERVAL_MS: u64 = 100;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use mergestats::MergeStatsConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = MergeStatsConfig::load().expect("failed to load configuration");
/// let username = config.require_username().expect("username required");
/// let (year, month) = config.require_year_month().expect("period required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "MERGESTATS",
    discovery(
        dotfile_name = ".mergestats.toml",
        config_file_name = "mergestats.toml",
        app_name = "mergestats"
    )
)]
pub struct MergeStatsConfig {
    /// GitHub login whose pull requests are counted.
    ///
    /// Can be provided via:
    /// - CLI: `--username <LOGIN>` or `-u <LOGIN>`
    /// - Environment: `MERGESTATS_USERNAME`
    /// - Config file: `username = "..."`
    #[ortho_config(cli_short = 'u')]
    pub username: Option<String>,

    /// Calendar year of the reporting month.
    #[ortho_config(cli_short = 'y')]
    pub year: Option<i32>,

    /// Reporting month, 1 to 12.
    #[ortho_config(cli_short = 'm')]
    pub month: Option<u32>,

    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `MERGESTATS_TOKEN` or `GITHUB_TOKEN`
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Base URL of the GitHub REST API.
    ///
    /// GitHub Enterprise Server installations serve the API under
    /// `https://<host>/api/v3`.
    #[ortho_config()]
    pub api_base: String,

    /// `User-Agent` header sent with every request.
    #[ortho_config()]
    pub user_agent: String,

    /// Pause between successful pull request detail lookups, in
    /// milliseconds. Zero disables pacing.
    #[ortho_config()]
    pub pacing_interval_ms: u64,

    /// Prints the full result as JSON instead of a text summary.
    ///
    /// Can be provided via:
    /// - CLI: `--json` / `-j`
    /// - Config file: `json = true`
    ///
    /// Note: `MERGESTATS_JSON` is not read because `ortho_config` does not
    /// load boolean values from the environment.
    #[ortho_config(cli_short = 'j')]
    pub json: bool,
}

impl Default for MergeStatsConfig {
    fn default() -> Self {
        Self {
            username: None,
            year: None,
            month: None,
            token: None,
            api_base: DEFAULT_API_BASE.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            pacing_interval_ms: DEFAULT_PACING_INTERVAL_MS,
            json: false,
        }
    }
}

impl MergeStatsConfig {
    /// Resolves the token from configuration or the `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::MissingToken`] when no token source provides a
    /// value.
    pub fn resolve_token(&self) -> Result<String, StatsError> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .ok_or(StatsError::MissingToken)
    }

    /// Returns the username or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::Configuration`] when no username is configured.
    pub fn require_username(&self) -> Result<&str, StatsError> {
        self.username
            .as_deref()
            .ok_or_else(|| StatsError::Configuration {
                message: "username is required (use --username or -u)".to_owned(),
            })
    }

    /// Returns the configured year and month.
    ///
    /// Range checks happen when the period is built.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::Configuration`] when either value is missing.
    pub fn require_year_month(&self) -> Result<(i32, u32), StatsError> {
        match (self.year, self.month) {
            (Some(year), Some(month)) => Ok((year, month)),
            (None, _) => Err(StatsError::Configuration {
                message: "year is required (use --year or -y)".to_owned(),
            }),
            (_, None) => Err(StatsError::Configuration {
                message: "month is required (use --month or -m)".to_owned(),
            }),
        }
    }

    /// Parses the configured API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidUrl`] when the value is not an HTTP(S)
    /// URL with a host.
    pub fn api_base(&self) -> Result<ApiBase, StatsError> {
        ApiBase::parse(&self.api_base)
    }

    /// Pause between detail lookups.
    #[must_use]
    pub const fn pacing_interval(&self) -> Duration {
        Duration::from_millis(self.pacing_interval_ms)
    }
}

#[cfg(test)]
mod tests;
