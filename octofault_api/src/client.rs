//! HTTP client adapter that turns non-success responses into [`ApiException`]s.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{response::ApiResponse, ApiException, Error};

/// Request timeout for API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("octofault/", env!("CARGO_PKG_VERSION"));

/// Thin GET client for a JSON API.
///
/// Success bodies are decoded into the caller's type; any other status is
/// surfaced as [`Error::Api`] carrying the decoded fault.
pub struct Client {
    /// Base URL for the API. Defaults to `https://api.github.com`.
    base_api_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Creates a new client pointing at the production API.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url("https://api.github.com")
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })
    }

    /// Fetches `path` and returns the raw response, whatever its status.
    pub async fn get_response(&self, path: &str) -> Result<ApiResponse, Error> {
        let url = self.get_url(path)?;
        let resp = self
            .http
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;
        Ok(ApiResponse::from_reqwest(resp).await)
    }

    /// Fetches `path` and decodes a success body as `T`.
    pub async fn get_json<T>(&self, path: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let response = self.get_response(path).await?;

        if !response.is_success() {
            let exception = ApiException::from_response(response);
            tracing::error!(
                "Request failed with status {}: {}",
                exception.status_code().unwrap_or_default(),
                exception.message()
            );
            return Err(Error::Api(exception));
        }

        let parsed = serde_json::from_str::<T>(response.body().unwrap_or_default()).map_err(|e| {
            tracing::error!("Failed to parse resource: {}", e);
            e
        })?;

        Ok(parsed)
    }
}
