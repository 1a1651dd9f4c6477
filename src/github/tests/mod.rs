//! Unit tests for the GitHub identity wrappers.


use rstest::rstest;

use super::{ApiBase, PersonalAccessToken, StatsError};

#[rstest]
fn token_is_trimmed() {
    let token = PersonalAccessToken::new("  ghp_example \n").expect("token should be valid");
    assert_eq!(token.value(), "ghp_example");
}

#[rstest]
#[case::empty("")]
#[case::whitespace("   ")]
fn blank_token_is_missing(#[case] value: &str) {
    let result = PersonalAccessToken::new(value);
    assert!(
        matches!(result, Err(StatsError::MissingToken)),
        "expected MissingToken, got {result:?}"
    );
}

#[rstest]
#[case::github("https://api.github.com", "https://api.github.com")]
#[case::trailing_slash("https://api.github.com/", "https://api.github.com")]
#[case::enterprise("https://ghe.example.com/api/v3/", "https://ghe.example.com/api/v3")]
fn api_base_normalises_trailing_slash(#[case] input: &str, #[case] expected: &str) {
    let base = ApiBase::parse(input).expect("api base should parse");
    assert_eq!(base.as_str(), expected);
}

#[rstest]
#[case::not_a_url("api.github.com")]
#[case::wrong_scheme("ftp://api.github.com")]
fn api_base_rejects_unusable_urls(#[case] input: &str) {
    let result = ApiBase::parse(input);
    assert!(
        matches!(result, Err(StatsError::InvalidUrl(_))),
        "expected InvalidUrl, got {result:?}"
    );
}

#[rstest]
fn api_base_defaults_to_github() {
    assert_eq!(ApiBase::default().as_str(), "https://api.github.com");
}
