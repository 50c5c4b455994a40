//! Client-side decoding of API error responses.
//!
//! A non-success response becomes an [`ApiException`]: the HTTP status plus an
//! [`ApiError`](types::ApiError) decoded from the body. Decoding never fails;
//! bodies that are not structured error payloads are kept verbatim as the
//! message.
mod client;
mod errors;
mod exception;
mod parser;
mod response;
pub mod types;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::exception::{ApiException, GENERIC_MESSAGE};
pub use self::parser::ApiErrorParser;
pub use self::response::ApiResponse;
