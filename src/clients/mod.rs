//! HTTP client layer for Vend API communication.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async client with the retry loop
//! - [`HttpRequest`] / [`HttpResponse`]: request and response types
//! - [`classify`] / [`ResponseClass`]: what a status code means for the loop
//! - [`backoff_duration`] / [`RetryPolicy`]: how long and how often to retry
//! - [`CancelToken`]: caller-controlled cancellation
//!
//! # Retry Behavior
//!
//! | Outcome | Action |
//! |---|---|
//! | 200, 201 | return the body |
//! | 401, 404, 502 | return [`HttpError::Fatal`], no retry |
//! | 429, 500, any other status | retry after backoff |
//! | connection error, timeout | retry after backoff |
//!
//! Retries stop with [`HttpError::MaxRetries`] once the [`RetryPolicy`] runs
//! out. The client never terminates the process.

mod cancel;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod retry;
mod status;

pub use cancel::CancelToken;
pub use errors::{
    FatalStatusError, HttpError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, MultipartFile};
pub use http_response::HttpResponse;
pub use retry::{backoff_duration, RetryPolicy};
pub use status::{classify, FatalStatus, ResponseClass};
