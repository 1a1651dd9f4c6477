//! Identity wrappers for the search and pull request endpoints.

use url::Url;

use super::error::StatsError;

/// Default GitHub REST API base.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

const MAX_USERNAME_LENGTH: usize = 39;

/// Suffix GitHub appends to the login of an app's bot account.
const BOT_SUFFIX: &str = "[bot]";

/// Personal access token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, StatsError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(StatsError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// GitHub login of the pull request author.
///
/// The value is interpolated into a search query, so anything beyond the
/// characters GitHub allows in a login is rejected up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Validates a GitHub login.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidUsername`] when the value is blank, longer
    /// than 39 characters, starts with a hyphen, or contains characters other
    /// than ASCII letters, digits and hyphens. App bot logins such as
    /// `dependabot[bot]` are accepted; the rules apply to the part before
    /// the `[bot]` suffix.
    pub fn new(value: &str) -> Result<Self, StatsError> {
        let trimmed = value.trim();
        let login = trimmed.strip_suffix(BOT_SUFFIX).unwrap_or(trimmed);
        let reject = |message: &str| {
            Err(StatsError::InvalidUsername {
                message: message.to_owned(),
            })
        };

        if login.is_empty() {
            return reject("username is required");
        }
        if login.len() > MAX_USERNAME_LENGTH {
            return reject("username must be at most 39 characters");
        }
        if login.starts_with('-') {
            return reject("username must not start with a hyphen");
        }
        if !login
            .chars()
            .all(|character| character.is_ascii_alphanumeric() || character == '-')
        {
            return reject("username may only contain letters, digits and hyphens");
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the login.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Base URL of the GitHub REST API.
///
/// `https://api.github.com` for github.com, `https://<host>/api/v3` for
/// GitHub Enterprise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase(String);

impl ApiBase {
    /// Parses an API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidUrl`] when the value does not parse or is
    /// not an `http`/`https` URL with a host.
    pub fn parse(input: &str) -> Result<Self, StatsError> {
        let parsed =
            Url::parse(input.trim()).map_err(|error| StatsError::InvalidUrl(error.to_string()))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(StatsError::InvalidUrl(format!(
                "unsupported scheme `{}`",
                parsed.scheme()
            )));
        }
        if parsed.host_str().is_none() {
            return Err(StatsError::InvalidUrl("URL must include a host".to_owned()));
        }

        Ok(Self(parsed.as_str().trim_end_matches('/').to_owned()))
    }

    /// Borrow the URL without a trailing slash.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        Self(DEFAULT_API_BASE.to_owned())
    }
}

/// Repository identifier in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RepositoryName {
    owner: String,
    name: String,
}

impl RepositoryName {
    /// Builds a repository identifier from its two parts.
    ///
    /// Returns `None` when either part is empty or contains a slash.
    #[must_use]
    pub fn new(owner: &str, name: &str) -> Option<Self> {
        let valid = |part: &str| !part.is_empty() && !part.contains('/');
        (valid(owner) && valid(name)).then(|| Self {
            owner: owner.to_owned(),
            name: name.to_owned(),
        })
    }

    /// Resolves the `repository_url` attached to a search result.
    ///
    /// The path must end in `repos/<owner>/<name>`; the API prefix before it
    /// (such as `/api/v3` on GitHub Enterprise) is ignored. Anything else,
    /// including trailing segments, yields `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use mergestats::github::locator::RepositoryName;
    ///
    /// let repo = RepositoryName::from_repository_url("https://api.github.com/repos/octo/cat")
    ///     .expect("should resolve");
    /// assert_eq!(repo.full_name(), "octo/cat");
    /// assert!(RepositoryName::from_repository_url("https://api.github.com/users/octo").is_none());
    /// ```
    #[must_use]
    pub fn from_repository_url(reference: &str) -> Option<Self> {
        let parsed = Url::parse(reference).ok()?;
        let mut segments = parsed.path_segments()?.rev();

        let name = segments.next()?;
        let owner = segments.next()?;
        let marker = segments.next()?;

        if marker != "repos" {
            return None;
        }

        Self::new(owner, name)
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &str {
        self.owner.as_str()
    }

    /// Repository name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The `owner/name` form used as the aggregation key.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    pub(crate) fn pull_request_path(&self, number: PullRequestNumber) -> String {
        format!("/repos/{}/{}/pulls/{}", self.owner, self.name, number.get())
    }
}

/// Pull request number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullRequestNumber(u64);

impl PullRequestNumber {
    /// Wraps a pull request number.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}
