mod api_error;
pub use self::api_error::{ApiError, ApiErrorDetail};
