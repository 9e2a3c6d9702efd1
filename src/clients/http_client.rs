//! HTTP client for Vend API communication.
//!
//! This module provides the [`HttpClient`] type: one authenticated request
//! at a time, retried with backoff until it succeeds, hits a fatal status,
//! exhausts its [`RetryPolicy`], or is cancelled.

use std::collections::HashMap;
use std::time::Instant;

use crate::clients::cancel::CancelToken;
use crate::clients::errors::{FatalStatusError, HttpError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::retry::RetryPolicy;
use crate::clients::status::{classify, ResponseClass};
use crate::config::{ApiToken, VendConfig};

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Vend API.
///
/// The client handles:
/// - `Authorization: Bearer` and `User-Agent` headers
/// - Retrying transport failures and non-fatal statuses with backoff
/// - Mapping 401, 404 and 502 to [`HttpError::Fatal`] without retrying
/// - Honouring a [`CancelToken`] between attempts and during backoff
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use vend_api::{ApiToken, DomainPrefix, VendConfig};
/// use vend_api::clients::HttpClient;
///
/// let config = VendConfig::builder()
///     .token(ApiToken::new("token")?)
///     .domain_prefix(DomainPrefix::new("mystore")?)
///     .build()?;
///
/// let client = HttpClient::new(&config)?;
/// let body = client
///     .get_bytes("https://mystore.vendhq.com/api/2.0/outlets?after=0")
///     .await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Token sent as a bearer credential.
    token: ApiToken,
    /// Headers other than `Authorization` sent with every request.
    default_headers: HashMap<String, String>,
    retry_policy: RetryPolicy,
    cancel: CancelToken,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &VendConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}vend-api-rust v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            token: config.token().clone(),
            default_headers,
            retry_policy: config.retry_policy().clone(),
            cancel: CancelToken::new(),
        })
    }

    /// Replaces the cancellation token checked between attempts.
    #[must_use]
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Returns the headers sent with every request, `Authorization` excluded.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the retry policy.
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    /// Returns the cancellation token.
    #[must_use]
    pub const fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// GETs `url` and returns the body of the first successful response.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        let response = self.execute(HttpRequest::get(url)).await?;
        Ok(response.into_body())
    }

    /// Sends a request, retrying until it succeeds or cannot be retried.
    ///
    /// Each try is classified with [`classify`]:
    /// - success: the response is returned
    /// - fatal: [`HttpError::Fatal`] is returned at once
    /// - retryable, unknown, or a transport failure: the client sleeps for
    ///   the policy's backoff and tries again
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A fatal status is received (`Fatal`)
    /// - The retry policy is exhausted (`MaxRetries`)
    /// - The cancel token is triggered (`Cancelled`)
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;
        if let Some(file) = &request.multipart {
            // Surfaces a bad MIME type once instead of retrying it.
            file.to_form()?;
        }

        let started = Instant::now();
        let mut attempt: u32 = 0;
        loop {
            if self.cancel.is_cancelled() {
                return Err(HttpError::Cancelled);
            }
            attempt += 1;

            let (code, message) = match self.send_once(&request).await {
                Ok(response) => match classify(response.code) {
                    ResponseClass::Success => return Ok(response),
                    ResponseClass::Fatal(status) => {
                        return Err(HttpError::Fatal(FatalStatusError {
                            code: response.code,
                            status,
                            url: request.url.clone(),
                        }));
                    }
                    ResponseClass::Retryable | ResponseClass::Unknown => {
                        (Some(response.code), Self::describe_failure(&response))
                    }
                },
                Err(error) => {
                    tracing::warn!(url = %request.url, attempt, %error, "error performing request");
                    (None, error.to_string())
                }
            };

            let delay = self.retry_policy.delay(attempt);
            if !self
                .retry_policy
                .allows_retry(attempt, started.elapsed(), delay)
            {
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    tries: attempt,
                    code,
                    message,
                }));
            }
            tracing::debug!(url = %request.url, attempt, ?delay, "retrying request");
            tokio::select! {
                () = tokio::time::sleep(delay) => {}
                () = self.cancel.cancelled() => {
                    tracing::debug!(url = %request.url, attempt, "backoff interrupted by cancel");
                    return Err(HttpError::Cancelled);
                }
            }
        }
    }

    /// Performs one try. Reading the body counts as part of the transport.
    async fn send_once(&self, request: &HttpRequest) -> Result<HttpResponse, reqwest::Error> {
        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        req_builder = req_builder.header("Authorization", self.token.bearer());
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(file) = &request.multipart {
            req_builder = req_builder.multipart(file.to_form()?);
        }

        let res = req_builder.send().await?;
        let code = res.status().as_u16();
        let request_id = res
            .headers()
            .get("x-request-id")
            .and_then(|value| value.to_str().ok())
            .map(String::from);
        let body = res.bytes().await?.to_vec();

        Ok(HttpResponse::new(code, body, request_id))
    }

    /// Builds the error message kept for a failed status.
    fn describe_failure(response: &HttpResponse) -> String {
        const MAX_BODY_CHARS: usize = 200;

        let body: String = String::from_utf8_lossy(&response.body)
            .chars()
            .take(MAX_BODY_CHARS)
            .collect();
        let mut message = format!("status {}", response.code);
        if !body.trim().is_empty() {
            message.push_str(": ");
            message.push_str(body.trim());
        }
        if let Some(request_id) = &response.request_id {
            message.push_str(&format!(" (request id {request_id})"));
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DomainPrefix;

    fn create_test_config(prefix: Option<&str>) -> VendConfig {
        let mut builder = VendConfig::builder()
            .token(ApiToken::new("test-token").unwrap())
            .domain_prefix(DomainPrefix::new("test-store").unwrap());
        if let Some(prefix) = prefix {
            builder = builder.user_agent_prefix(prefix);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config(None)).unwrap();
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("vend-api-rust v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let client = HttpClient::new(&create_test_config(Some("StockSync/2.1"))).unwrap();
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("StockSync/2.1 | "));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config(None)).unwrap();
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_debug_output_hides_token() {
        let client = HttpClient::new(&create_test_config(None)).unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("test-token"));
    }

    #[test]
    fn test_describe_failure_includes_body_and_request_id() {
        let response = HttpResponse::new(
            429,
            br#"{"error":"slow down"}"#.to_vec(),
            Some("req-1".to_string()),
        );
        let message = HttpClient::describe_failure(&response);
        assert!(message.starts_with("status 429"));
        assert!(message.contains("slow down"));
        assert!(message.contains("req-1"));
    }

    #[tokio::test]
    async fn test_cancelled_token_stops_before_first_attempt() {
        let cancel = CancelToken::new();
        cancel.cancel();
        let client = HttpClient::new(&create_test_config(None))
            .unwrap()
            .with_cancel_token(cancel);

        let result = client.get_bytes("http://127.0.0.1:9/never").await;
        assert!(matches!(result, Err(HttpError::Cancelled)));
    }
}
