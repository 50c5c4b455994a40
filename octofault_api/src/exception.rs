//! The fault value surfaced to callers when the API reports a failure.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{parser::ApiErrorParser, response::ApiResponse, types::ApiError};

/// Shown when the service gave no usable message.
pub const GENERIC_MESSAGE: &str = "An error occurred with this API request";

/// A failed API request: HTTP status plus the decoded [`ApiError`].
///
/// Serializes to `{"status_code": .., "api_error": {..}}`. The raw
/// [`ApiResponse`] is kept only for in-process diagnostics and does not
/// survive a serialize/deserialize round trip.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ApiException {
    status_code: Option<u16>,
    api_error: ApiError,
    #[serde(skip)]
    http_response: Option<ApiResponse>,
}

impl ApiException {
    /// A fault with no response attached (e.g. the request never got one).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_response(response: ApiResponse) -> Self {
        Self {
            status_code: Some(response.status_code()),
            api_error: ApiErrorParser::parse(response.body()),
            http_response: Some(response),
        }
    }

    pub fn from_optional_response(response: Option<ApiResponse>) -> Self {
        match response {
            Some(response) => Self::from_response(response),
            None => Self::new(),
        }
    }

    /// HTTP status of the failed response, or `None` if no response was received.
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    pub fn api_error(&self) -> &ApiError {
        &self.api_error
    }

    pub fn http_response(&self) -> Option<&ApiResponse> {
        self.http_response.as_ref()
    }

    /// Message suitable for display: the service's message when it has one,
    /// otherwise [`GENERIC_MESSAGE`].
    pub fn message(&self) -> &str {
        match self.api_error.message.as_deref() {
            Some(message) if !message.trim().is_empty() => message,
            _ => GENERIC_MESSAGE,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status_code == Some(401)
    }

    pub fn is_forbidden(&self) -> bool {
        self.status_code == Some(403)
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code == Some(404)
    }

    /// True for 422 responses, where `api_error().errors` usually names the
    /// offending fields.
    pub fn is_validation_failure(&self) -> bool {
        self.status_code == Some(422)
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self.status_code, Some(500..=599))
    }
}

impl From<ApiResponse> for ApiException {
    fn from(response: ApiResponse) -> Self {
        Self::from_response(response)
    }
}

impl fmt::Display for ApiException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ApiException {}
