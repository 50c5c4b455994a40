//! API client that records every fault it sees.

use octofault_api::{ApiException, Client};
use serde::de::DeserializeOwned;

use crate::error::OctofaultError;
use crate::fault_log::FaultLog;

/// Wraps [`Client`] and writes API faults to a [`FaultLog`] before returning them.
///
/// Transport failures (no response) and decode failures of success bodies are
/// not recorded. A failed log write is logged and never replaces the API fault.
pub struct RecordingClient {
    client: Client,
    log: Option<FaultLog>,
}

impl RecordingClient {
    pub fn new(client: Client, log: Option<FaultLog>) -> Self {
        Self { client, log }
    }

    pub fn log(&self) -> Option<&FaultLog> {
        self.log.as_ref()
    }

    pub async fn get_json<T>(&self, path: &str) -> Result<T, OctofaultError>
    where
        T: DeserializeOwned,
    {
        match self.client.get_json::<T>(path).await {
            Ok(value) => Ok(value),
            Err(octofault_api::Error::Api(exception)) => {
                if let Err(e) = self.record(&exception, path) {
                    tracing::warn!("Failed to record fault from {}: {}", path, e);
                }
                Err(OctofaultError::Api(octofault_api::Error::Api(exception)))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Records a fault obtained elsewhere. Returns the row id, or `None` when
    /// no log is configured.
    pub fn record(
        &self,
        exception: &ApiException,
        source: &str,
    ) -> Result<Option<i64>, OctofaultError> {
        match &self.log {
            Some(log) => Ok(Some(log.record(exception, source)?)),
            None => Ok(None),
        }
    }
}
