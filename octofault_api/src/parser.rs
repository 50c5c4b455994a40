//! Decoding of error response bodies into [`ApiError`] values.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::types::{ApiError, ApiErrorDetail};

/// Wire shape of a structured error body. Every field is optional, but at
/// least one of `message` or `errors` must be present for the body to count
/// as structured. A top-level field that is present must not be `null`.
#[derive(Deserialize)]
struct ErrorPayload {
    message: Option<String>,
    errors: Option<Vec<ApiErrorDetail>>,
    documentation_url: Option<String>,
}

/// Outcome of attempting a structured decode.
enum Decoded {
    Structured(ApiError),
    RawText,
}

/// Converts raw response text into an [`ApiError`].
///
/// Never fails: a body that is missing, empty, malformed, or of the wrong
/// shape becomes an `ApiError` whose message is the body text verbatim.
pub struct ApiErrorParser;

impl ApiErrorParser {
    pub fn parse(body: Option<&str>) -> ApiError {
        match body.map_or(Decoded::RawText, decode) {
            Decoded::Structured(api_error) => api_error,
            Decoded::RawText => {
                tracing::debug!(
                    "Response body is not a structured error, using raw text ({} bytes)",
                    body.map_or(0, str::len)
                );
                ApiError::with_message(body.map(str::to_string))
            }
        }
    }
}

const TOP_LEVEL_FIELDS: [&str; 3] = ["message", "errors", "documentation_url"];

fn decode(body: &str) -> Decoded {
    // Only a top-level object qualifies; serde would otherwise accept a JSON
    // array positionally for the payload struct.
    let object = match serde_json::from_str::<Map<String, Value>>(body) {
        Ok(object) => object,
        Err(_) => return Decoded::RawText,
    };
    if TOP_LEVEL_FIELDS
        .iter()
        .any(|field| matches!(object.get(*field), Some(Value::Null)))
    {
        return Decoded::RawText;
    }
    let payload = match serde_json::from_value::<ErrorPayload>(Value::Object(object)) {
        Ok(payload) => payload,
        Err(_) => return Decoded::RawText,
    };
    if payload.message.is_none() && payload.errors.is_none() {
        return Decoded::RawText;
    }
    Decoded::Structured(ApiError {
        message: payload.message,
        errors: payload.errors.unwrap_or_default(),
        documentation_url: payload.documentation_url,
    })
}
