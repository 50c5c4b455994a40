//! Error types for the API client.

use crate::ApiException;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never produced a usable response (network error, timeout,
    /// invalid URL).
    #[error("Request failed")]
    RequestFailed,
    /// The API answered with a non-success status.
    #[error(transparent)]
    Api(#[from] ApiException),
    /// A success response whose body did not match the expected type.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// The API fault, if this error came from a non-success response.
    pub fn api_exception(&self) -> Option<&ApiException> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}
