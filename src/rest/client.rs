//! Resource-level client for the Vend API.

use crate::clients::{CancelToken, HttpClient, HttpError};
use crate::config::{StoreTimeZone, VendConfig};
use crate::rest::{pagination, ApiBase, ResourceError, ResourceList, VendResource};

/// Client for listing Vend resources and uploading product images.
///
/// Wraps an [`HttpClient`] with the store's [`ApiBase`]. Each accessor walks
/// every page of its resource sequentially and returns the records in
/// arrival order.
///
/// # Thread Safety
///
/// `VendClient` is `Send + Sync`. Fetches of different resources may run
/// concurrently; each owns its own cursor and accumulator.
///
/// # Example
///
/// ```rust,ignore
/// use vend_api::{ApiToken, DomainPrefix, VendClient, VendConfig};
///
/// let config = VendConfig::builder()
///     .token(ApiToken::new("token")?)
///     .domain_prefix(DomainPrefix::new("mystore")?)
///     .build()?;
///
/// let client = VendClient::new(&config)?;
/// let outlets = client.outlets().await?;
/// for (id, versions) in outlets.group_by_id() {
///     println!("{id}: {} records", versions.len());
/// }
/// ```
#[derive(Debug)]
pub struct VendClient {
    http_client: HttpClient,
    base: ApiBase,
    time_zone: StoreTimeZone,
}

// Verify VendClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<VendClient>();
};

impl VendClient {
    /// Creates a client for the store described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be created.
    pub fn new(config: &VendConfig) -> Result<Self, HttpError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
            base: ApiBase::from_config(config),
            time_zone: config.time_zone(),
        })
    }

    /// Makes every request from this client observe `cancel`.
    #[must_use]
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.http_client = self.http_client.with_cancel_token(cancel);
        self
    }

    /// Returns the base all request URLs are built from.
    #[must_use]
    pub const fn base(&self) -> &ApiBase {
        &self.base
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the store timezone, for use with
    /// [`parse_vend_datetime`](crate::time::parse_vend_datetime).
    #[must_use]
    pub const fn time_zone(&self) -> StoreTimeZone {
        self.time_zone
    }

    /// Fetches every record of resource `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if a request fails, a page cannot be decoded,
    /// or the server breaks the cursor protocol.
    pub async fn fetch_all<T: VendResource>(&self) -> Result<ResourceList<T>, ResourceError> {
        pagination::fetch_all(&self.http_client, &self.base).await
    }
}
