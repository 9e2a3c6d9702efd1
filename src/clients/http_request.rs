//! HTTP request types for the Vend API client.
//!
//! Requests carry an absolute URL (see [`ApiBase`](crate::rest::ApiBase))
//! and an optional body kept as plain bytes so the retry loop can rebuild
//! it for every attempt.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// Fetches a page of a resource.
    Get,
    /// Uploads data (product images).
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
        }
    }
}

/// A single file sent as one `multipart/form-data` field.
#[derive(Clone, PartialEq, Eq)]
pub struct MultipartFile {
    /// Form field name.
    pub field: String,
    /// File name reported in the `Content-Disposition` header.
    pub file_name: String,
    /// MIME type of the file.
    pub mime: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl fmt::Debug for MultipartFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultipartFile")
            .field("field", &self.field)
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl MultipartFile {
    /// Builds a fresh reqwest form for one attempt.
    pub(crate) fn to_form(&self) -> Result<reqwest::multipart::Form, reqwest::Error> {
        let part = reqwest::multipart::Part::bytes(self.bytes.clone())
            .file_name(self.file_name.clone())
            .mime_str(&self.mime)?;
        Ok(reqwest::multipart::Form::new().part(self.field.clone(), part))
    }
}

/// An HTTP request to be sent to the Vend API.
///
/// # Example
///
/// ```rust
/// use vend_api::clients::{HttpMethod, HttpRequest};
///
/// let request = HttpRequest::builder(
///     HttpMethod::Get,
///     "https://mystore.vendhq.com/api/2.0/products?after=0",
/// )
/// .build()
/// .unwrap();
///
/// assert_eq!(request.http_method, HttpMethod::Get);
/// assert!(request.multipart.is_none());
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The absolute URL for this request.
    pub url: String,
    /// The multipart body, if any.
    pub multipart: Option<MultipartFile>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, url)
    }

    /// Shorthand for a validated GET request.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            http_method: HttpMethod::Get,
            url: url.into(),
            multipart: None,
        }
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the URL is empty or a POST has
    /// no body.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.url.trim().is_empty() {
            return Err(InvalidHttpRequestError::MissingUrl);
        }
        if self.http_method == HttpMethod::Post && self.multipart.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    url: String,
    multipart: Option<MultipartFile>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            http_method: method,
            url: url.into(),
            multipart: None,
        }
    }

    /// Attaches a file as a multipart form field.
    #[must_use]
    pub fn multipart(mut self, file: MultipartFile) -> Self {
        self.multipart = Some(file);
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            url: self.url,
            multipart: self.multipart,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> MultipartFile {
        MultipartFile {
            field: "image".to_string(),
            file_name: "shoe.jpg".to_string(),
            mime: "image/jpeg".to_string(),
            bytes: vec![0xFF, 0xD8, 0xFF],
        }
    }

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
    }

    #[test]
    fn test_verify_requires_body_for_post() {
        let result = HttpRequest::builder(HttpMethod::Post, "https://x.vendhq.com").build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "post"
        ));
    }

    #[test]
    fn test_verify_requires_url() {
        let result = HttpRequest::builder(HttpMethod::Get, "  ").build();
        assert_eq!(result.unwrap_err(), InvalidHttpRequestError::MissingUrl);
    }

    #[test]
    fn test_builder_creates_valid_post_request() {
        let request = HttpRequest::builder(HttpMethod::Post, "https://x.vendhq.com/upload")
            .multipart(image())
            .build()
            .unwrap();
        assert_eq!(request.multipart.unwrap().field, "image");
    }

    #[test]
    fn test_multipart_debug_hides_bytes() {
        let debug = format!("{:?}", image());
        assert!(debug.contains("len: 3"));
        assert!(!debug.contains("255"));
    }

    #[test]
    fn test_multipart_form_builds_for_each_attempt() {
        let file = image();
        assert!(file.to_form().is_ok());
        assert!(file.to_form().is_ok());
    }
}
