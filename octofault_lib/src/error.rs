//! Error types for the library layer.

use std::fmt;

use octofault_api::ApiException;

use crate::fault_log::FaultLogError;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding fault log failures.
#[derive(Debug)]
pub enum OctofaultError {
    /// An error from the underlying API client.
    Api(octofault_api::Error),
    /// Reading or writing the fault log failed.
    FaultLog(FaultLogError),
}

impl OctofaultError {
    /// The API fault, if the request reached the service and it reported a failure.
    pub fn api_exception(&self) -> Option<&ApiException> {
        match self {
            Self::Api(e) => e.api_exception(),
            Self::FaultLog(_) => None,
        }
    }
}

impl fmt::Display for OctofaultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::FaultLog(e) => write!(f, "Fault log error: {}", e),
        }
    }
}

impl std::error::Error for OctofaultError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::FaultLog(e) => Some(e),
        }
    }
}

impl From<octofault_api::Error> for OctofaultError {
    fn from(e: octofault_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<FaultLogError> for OctofaultError {
    fn from(e: FaultLogError) -> Self {
        Self::FaultLog(e)
    }
}
