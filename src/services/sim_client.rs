//! Client for the external question-answering API
//!
//! The API takes a single GET of the form `<base>?type=ask&ask=<message>` and
//! answers with a JSON object carrying an `answer` field.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, error};
use url::Url;

use crate::config::RelayConfig;
use crate::error::RelayError;

/// Reply used when the API returns JSON without an answer.
pub const NO_ANSWER: &str = "Không có câu trả lời";

/// Left as-is when encoding: unreserved characters and `/`. Space becomes `%20`.
const ASK_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// Percent-encode a message so it can be placed in a query string.
pub fn encode_message(message: &str) -> String {
    utf8_percent_encode(message, ASK_ENCODE_SET).to_string()
}

/// Build the `ask` URL for an already encoded message.
pub fn ask_url(base: &Url, encoded_message: &str) -> Url {
    let mut url = base.clone();
    url.set_query(Some(&format!("type=ask&ask={encoded_message}")));
    url
}

/// Ask the API and return the answer text.
pub async fn fetch_answer(
    client: &Client,
    config: &RelayConfig,
    message: &str,
) -> Result<String, RelayError> {
    let encoded = encode_message(message);
    debug!(encoded = %encoded, "Encoded message");

    let url = ask_url(&config.api_base_url, &encoded);
    debug!(url = %url, "API URL");

    let response = client
        .get(url)
        .timeout(config.request_timeout)
        .send()
        .await
        .map_err(|e| network_error(&e))?;

    let status = response.status();
    debug!(status = status.as_u16(), "API response status code");

    let body = response.text().await.map_err(|e| network_error(&e))?;
    debug!(body = %body, "API response text");

    if status != StatusCode::OK {
        error!(status = status.as_u16(), "API returned an error");
        return Err(RelayError::Status(status.as_u16()));
    }

    parse_answer(&body)
}

/// Pull the `answer` out of a 200 response body.
pub fn parse_answer(body: &str) -> Result<String, RelayError> {
    let value: Value = serde_json::from_str(body).map_err(|e| {
        error!(error = %e, "Failed to decode JSON from API response");
        RelayError::InvalidResponse
    })?;
    debug!(json = %value, "API JSON response");

    let Value::Object(fields) = value else {
        error!("API response is JSON but not an object");
        return Err(RelayError::InvalidResponse);
    };

    let answer = match fields.get("answer") {
        Some(Value::String(text)) => text.clone(),
        None | Some(Value::Null) => NO_ANSWER.to_string(),
        Some(other) => other.to_string(),
    };
    Ok(answer)
}

fn network_error(err: &reqwest::Error) -> RelayError {
    let relay_err = RelayError::from_reqwest(err);
    match relay_err {
        RelayError::Timeout => error!("API request timed out"),
        _ => error!(error = %err, "API request failed"),
    }
    relay_err
}
