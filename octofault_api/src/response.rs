//! Response descriptor handed from the transport to the error layer.

/// Raw HTTP response as observed by the transport: status, body text, and headers.
///
/// Kept on an [`ApiException`](crate::ApiException) for diagnostics only; it is
/// never part of the serialized fault.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    status_code: u16,
    body: Option<String>,
    headers: Vec<(String, String)>,
}

impl ApiResponse {
    pub fn new(status_code: u16, body: Option<String>) -> Self {
        Self {
            status_code,
            body,
            headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Captures status, headers, and body text from a live `reqwest` response.
    ///
    /// An empty body is kept as `Some("")`. A body that cannot be read (e.g.
    /// the connection drops mid-stream) is recorded as absent; status and
    /// headers are kept either way.
    pub async fn from_reqwest(resp: reqwest::Response) -> Self {
        let status_code = resp.status().as_u16();
        let headers = resp
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = match resp.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::warn!(
                    "Failed to read body of {} response, keeping status only: {}",
                    status_code,
                    e
                );
                None
            }
        };
        Self {
            status_code,
            body,
            headers,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Case-insensitive lookup of the first header with the given name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lookup_ignores_case() {
        let resp = ApiResponse::new(404, None)
            .with_header("Content-Type", "application/json")
            .with_header("X-GitHub-Request-Id", "abc");
        assert_eq!(resp.header("content-type"), Some("application/json"));
        assert_eq!(resp.header("x-github-request-id"), Some("abc"));
        assert_eq!(resp.header("etag"), None);
        assert_eq!(resp.headers().len(), 2);
    }

    #[test]
    fn test_is_success() {
        assert!(ApiResponse::new(204, None).is_success());
        assert!(!ApiResponse::new(422, None).is_success());
        assert!(!ApiResponse::new(301, None).is_success());
    }
}
