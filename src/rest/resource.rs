//! The [`VendResource`] trait implemented by every record type.

use serde::de::DeserializeOwned;

/// How a resource's pages are chained together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaginationStyle {
    /// `?after={version}`, cursor taken from the envelope's `version.max`;
    /// ends on the first empty page.
    Version,
    /// `?before={id}`, cursor taken from the last record's id; the boundary
    /// record repeats on the next page and a page of at most one record ends
    /// the stream.
    Flake,
}

/// A record type that can be listed from a Vend 2.0 endpoint.
///
/// Implementors only describe where they live and how they are identified;
/// [`VendClient::fetch_all`](crate::rest::VendClient::fetch_all) does the
/// paging and decoding.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use vend_api::rest::{PaginationStyle, VendResource};
///
/// #[derive(Debug, Deserialize)]
/// struct Brand {
///     id: Option<String>,
///     name: Option<String>,
/// }
///
/// impl VendResource for Brand {
///     const NAME: &'static str = "Brand";
///     const PATH: &'static str = "brands";
///     const PAGINATION: PaginationStyle = PaginationStyle::Version;
///
///     fn id(&self) -> Option<&str> {
///         self.id.as_deref()
///     }
/// }
/// ```
pub trait VendResource: DeserializeOwned + Send + 'static {
    /// Display name used in logs and errors (e.g., "Product").
    const NAME: &'static str;
    /// Endpoint path below `/api/2.0` (e.g., "products").
    const PATH: &'static str;
    /// Pagination protocol of the endpoint.
    const PAGINATION: PaginationStyle;

    /// The record's id, if the store supplied one.
    fn id(&self) -> Option<&str>;
}
