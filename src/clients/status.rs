//! Classification of Vend API response status codes.
//!
//! Every response goes through [`classify`], which decides whether the
//! client decodes the body, gives up, or retries.

use std::fmt;

/// A status the client must not retry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FatalStatus {
    /// 401: the personal API token was rejected.
    Unauthorized,
    /// 404: usually a wrong domain prefix.
    NotFound,
    /// 502: the API received an invalid upstream response.
    BadGateway,
}

impl fmt::Display for FatalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthorized => f.write_str("access denied, check the personal API token"),
            Self::NotFound => f.write_str("URL not found, check the domain prefix"),
            Self::BadGateway => f.write_str("server received an invalid response"),
        }
    }
}

/// The outcome of classifying a status code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseClass {
    /// 200 or 201.
    Success,
    /// 401, 404 or 502.
    Fatal(FatalStatus),
    /// 429 (rate limited) or 500 (server error).
    Retryable,
    /// Any other status. Not a success; retried like a retryable status.
    Unknown,
}

impl ResponseClass {
    /// Returns `true` for [`ResponseClass::Success`].
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns `true` if the request may be sent again.
    #[must_use]
    pub const fn should_retry(self) -> bool {
        matches!(self, Self::Retryable | Self::Unknown)
    }
}

/// Classifies `code` and logs a diagnostic for anything but success.
///
/// # Example
///
/// ```rust
/// use vend_api::clients::{classify, FatalStatus, ResponseClass};
///
/// assert_eq!(classify(201), ResponseClass::Success);
/// assert_eq!(classify(401), ResponseClass::Fatal(FatalStatus::Unauthorized));
/// assert_eq!(classify(429), ResponseClass::Retryable);
/// assert_eq!(classify(418), ResponseClass::Unknown);
/// ```
#[must_use]
pub fn classify(code: u16) -> ResponseClass {
    let class = match code {
        200 | 201 => ResponseClass::Success,
        401 => ResponseClass::Fatal(FatalStatus::Unauthorized),
        404 => ResponseClass::Fatal(FatalStatus::NotFound),
        502 => ResponseClass::Fatal(FatalStatus::BadGateway),
        429 | 500 => ResponseClass::Retryable,
        _ => ResponseClass::Unknown,
    };

    match class {
        ResponseClass::Success => {}
        ResponseClass::Fatal(status) => tracing::error!(code, "{status}"),
        ResponseClass::Retryable if code == 429 => {
            tracing::warn!(code, "rate limited by the Vend API");
        }
        ResponseClass::Retryable => tracing::warn!(code, "server error"),
        ResponseClass::Unknown => tracing::warn!(code, "unrecognized status code"),
    }

    class
}
