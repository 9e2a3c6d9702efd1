//! HTTP response type for the Vend API client.

use serde::de::DeserializeOwned;

/// A successful response from the Vend API.
///
/// The body is kept as raw bytes; pagination and resource code decode it.
///
/// # Example
///
/// ```rust
/// use vend_api::clients::HttpResponse;
///
/// let response = HttpResponse::new(200, br#"{"data":[]}"#.to_vec(), None);
/// let value: serde_json::Value = response.json().unwrap();
/// assert!(value["data"].as_array().unwrap().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The raw response body.
    pub body: Vec<u8>,
    /// The `X-Request-Id` header, when the API sends one.
    pub request_id: Option<String>,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(code: u16, body: Vec<u8>, request_id: Option<String>) -> Self {
        Self {
            code,
            body,
            request_id,
        }
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the [`serde_json::Error`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Consumes the response and returns the body.
    #[must_use]
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_reports_malformed_body() {
        let response = HttpResponse::new(200, b"not json".to_vec(), None);
        assert!(response.json::<serde_json::Value>().is_err());
    }
}
