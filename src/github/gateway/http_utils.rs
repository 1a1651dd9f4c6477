//! Response decoding shared by both gateway calls.

use http::StatusCode;
use serde::de::DeserializeOwned;

use super::ApiBody;

pub(super) fn extract_github_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}

/// Decodes a response body into the domain type.
///
/// An error `message` wins over the status code; a non-success status
/// without a message is still an error; anything else must match the `Api`
/// schema and pass `convert`.
pub(super) fn decode_body<Api, Domain, F>(
    status: StatusCode,
    body: &str,
    message: Option<String>,
    convert: F,
) -> ApiBody<Domain>
where
    Api: DeserializeOwned,
    F: FnOnce(Api) -> Result<Domain, String>,
{
    if let Some(text) = message {
        return ApiBody::Error { message: text };
    }

    if !status.is_success() {
        return ApiBody::Error {
            message: format!("GitHub returned status {status}"),
        };
    }

    match serde_json::from_str::<Api>(body) {
        Ok(api) => match convert(api) {
            Ok(domain) => ApiBody::Payload(domain),
            Err(detail) => ApiBody::Malformed { detail },
        },
        Err(error) => ApiBody::Malformed {
            detail: error.to_string(),
        },
    }
}
