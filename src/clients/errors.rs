//! HTTP-specific error types for the Vend API client.
//!
//! - [`FatalStatusError`]: a 401, 404 or 502 response; never retried
//! - [`MaxHttpRetriesExceededError`]: the retry policy ran out
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//! - [`HttpError`]: unified error type for all of the above
//!
//! Transport failures and retryable statuses are handled inside the retry
//! loop and only surface through [`MaxHttpRetriesExceededError`].
//!
//! # Example
//!
//! ```rust,ignore
//! use vend_api::clients::HttpError;
//!
//! match client.get_bytes(&url).await {
//!     Ok(body) => println!("{} bytes", body.len()),
//!     Err(HttpError::Fatal(e)) => eprintln!("giving up: {e}"),
//!     Err(HttpError::MaxRetries(e)) => eprintln!("after {} tries: {}", e.tries, e.message),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::status::FatalStatus;

/// A response whose status means retrying cannot help.
///
/// # Example
///
/// ```rust
/// use vend_api::clients::{FatalStatus, FatalStatusError};
///
/// let error = FatalStatusError {
///     code: 401,
///     status: FatalStatus::Unauthorized,
///     url: "https://mystore.vendhq.com/api/2.0/products?after=0".to_string(),
/// };
/// assert!(error.to_string().contains("401"));
/// ```
#[derive(Debug, Error)]
#[error("{status} (status {code}) for {url}")]
pub struct FatalStatusError {
    /// The HTTP status code.
    pub code: u16,
    /// Why the status is fatal.
    pub status: FatalStatus,
    /// The requested URL.
    pub url: String,
}

/// Error returned when the retry policy is exhausted.
///
/// # Example
///
/// ```rust
/// use vend_api::clients::MaxHttpRetriesExceededError;
///
/// let error = MaxHttpRetriesExceededError {
///     tries: 3,
///     code: Some(429),
///     message: "rate limited".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Exceeded maximum retry count of 3. Last message: rate limited"
/// );
/// ```
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// The number of tries that were made.
    pub tries: u32,
    /// The status of the last response, or `None` if the last try failed
    /// before a response arrived.
    pub code: Option<u16>,
    /// Description of the last failure.
    pub message: String,
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The URL is empty.
    #[error("Cannot send a request without a URL.")]
    MissingUrl,

    /// A POST was built without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A fatal status code (401, 404, 502).
    #[error(transparent)]
    Fatal(#[from] FatalStatusError),

    /// Maximum retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// The caller's [`CancelToken`](crate::clients::CancelToken) was triggered.
    #[error("Request cancelled")]
    Cancelled,

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The HTTP client could not be constructed or a request could not be
    /// assembled.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns `true` for [`HttpError::Fatal`].
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_status_error_message() {
        let error = FatalStatusError {
            code: 404,
            status: FatalStatus::NotFound,
            url: "https://nope.vendhq.com/api/2.0/users?after=0".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("domain prefix"));
        assert!(message.contains("404"));
        assert!(message.contains("nope.vendhq.com"));
    }

    #[test]
    fn test_max_retries_error_includes_retry_count() {
        let error = MaxHttpRetriesExceededError {
            tries: 5,
            code: None,
            message: "connection refused".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains('5'));
        assert!(message.contains("connection refused"));
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use post without specifying data.");
    }

    #[test]
    fn test_is_fatal() {
        let fatal = HttpError::Fatal(FatalStatusError {
            code: 502,
            status: FatalStatus::BadGateway,
            url: String::new(),
        });
        assert!(fatal.is_fatal());
        assert!(!HttpError::Cancelled.is_fatal());
    }
}
