//! Structured error payloads reported by the API.

use serde::{Deserialize, Serialize};

/// Structured representation of a failed request, as reported by the service.
///
/// When the response body could not be decoded as a structured payload,
/// `message` holds the raw body text verbatim and `errors` is empty.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiError {
    /// Top-level human-readable summary (e.g. "Validation Failed").
    #[serde(default)]
    pub message: Option<String>,

    /// Field-level entries, in the order the service sent them.
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,

    /// Link to the documentation page for this failure, when provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,
}

impl ApiError {
    /// Creates an error carrying only a message and no details.
    pub fn with_message(message: Option<String>) -> Self {
        Self {
            message,
            ..Self::default()
        }
    }

    /// Returns true if the service reported any field-level entries.
    pub fn has_details(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Message of the first detail entry, if any.
    pub fn first_detail_message(&self) -> Option<&str> {
        self.errors.first().and_then(|e| e.message.as_deref())
    }
}

/// One field-level validation entry within an [`ApiError`].
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiErrorDetail {
    /// Error category (e.g. "custom", "missing_field", "already_exists").
    #[serde(default)]
    pub code: Option<String>,

    /// Name of the offending field (e.g. "key").
    #[serde(default)]
    pub field: Option<String>,

    #[serde(default)]
    pub message: Option<String>,

    /// Resource type the entry refers to (e.g. "PublicKey").
    #[serde(default)]
    pub resource: Option<String>,
}
