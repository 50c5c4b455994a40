//! Library layer for octofault: persisted fault log and a recording API client.
//!
//! Wraps the `octofault_api` crate, storing every [`ApiException`] the client
//! observes so it can be inspected after the fact.

pub mod client;
pub mod error;
pub mod fault_log;

pub use octofault_api;
pub use octofault_api::types;
pub use octofault_api::{ApiErrorParser, ApiException, ApiResponse, Client, GENERIC_MESSAGE};

pub use client::RecordingClient;
pub use error::OctofaultError;
pub use fault_log::{FaultLog, FaultLogError, FaultRecord};
