//! Resource-level error types.
//!
//! - [`ResourceError::Http`]: the request failed (see [`HttpError`])
//! - [`ResourceError::Decode`]: a page body did not match the resource's shape
//! - [`ResourceError::Pagination`]: the cursor protocol was violated
//! - [`ResourceError::Io`]: a local file could not be read or removed (image upload)
//!
//! # Example
//!
//! ```rust,ignore
//! use vend_api::rest::ResourceError;
//!
//! match client.products().await {
//!     Ok(products) => println!("{} products", products.len()),
//!     Err(ResourceError::Http(e)) if e.is_fatal() => eprintln!("check credentials: {e}"),
//!     Err(ResourceError::Decode { resource, source }) => {
//!         eprintln!("bad {resource} page: {source}");
//!     }
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

use crate::clients::HttpError;

/// A violation of a pagination protocol by the server's responses.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaginationError {
    /// A non-empty version page came without `version.max`.
    #[error("{resource} page after version {cursor} has records but no max version")]
    MissingVersion {
        /// The resource being paged.
        resource: &'static str,
        /// The cursor the page was requested with.
        cursor: i64,
    },

    /// `version.max` did not move past the cursor.
    #[error("{resource} version cursor stalled at {cursor} (server returned max {max})")]
    StalledVersion {
        /// The resource being paged.
        resource: &'static str,
        /// The cursor the page was requested with.
        cursor: i64,
        /// The max version the server returned.
        max: i64,
    },

    /// A record needed as a flake cursor has no id.
    #[error("{resource} record without an id cannot be used as a page cursor")]
    MissingId {
        /// The resource being paged.
        resource: &'static str,
    },
}

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A response body could not be decoded.
    #[error("Failed to decode {resource} response: {source}")]
    Decode {
        /// The resource being decoded.
        resource: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The server broke the pagination protocol.
    #[error(transparent)]
    Pagination(#[from] PaginationError),

    /// A local file could not be read or removed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ResourceError {
    /// Wraps a JSON error for `resource`.
    #[must_use]
    pub fn decode(resource: &'static str, source: serde_json::Error) -> Self {
        Self::Decode { resource, source }
    }

    /// Returns `true` if the underlying HTTP error is fatal.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_fatal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{FatalStatus, FatalStatusError};

    #[test]
    fn test_decode_error_names_resource() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let error = ResourceError::decode("products", source);
        assert!(error.to_string().starts_with("Failed to decode products response"));
    }

    #[test]
    fn test_pagination_error_messages() {
        let error = PaginationError::StalledVersion {
            resource: "outlets",
            cursor: 10,
            max: 10,
        };
        assert!(error.to_string().contains("stalled at 10"));

        let error = PaginationError::MissingId {
            resource: "store_credits",
        };
        assert!(error.to_string().contains("store_credits"));
    }

    #[test]
    fn test_is_fatal_delegates_to_http_error() {
        let error = ResourceError::Http(HttpError::Fatal(FatalStatusError {
            code: 401,
            status: FatalStatus::Unauthorized,
            url: String::new(),
        }));
        assert!(error.is_fatal());
        assert!(!ResourceError::from(HttpError::Cancelled).is_fatal());
    }
}
