//! URL construction for Vend API 2.0 endpoints.
//!
//! All builders are pure string functions over an [`ApiBase`]; nothing here
//! touches the network.

use crate::config::{DomainPrefix, HostUrl, VendConfig};

/// Path prefix of every 2.0 endpoint.
pub const API_PATH: &str = "/api/2.0";

/// The root every request URL is built from, e.g.
/// `https://mystore.vendhq.com/api/2.0`.
///
/// # Example
///
/// ```rust
/// use vend_api::DomainPrefix;
/// use vend_api::rest::ApiBase;
///
/// let base = ApiBase::for_domain(&DomainPrefix::new("mystore").unwrap());
/// assert_eq!(
///     base.version_url("products", 0),
///     "https://mystore.vendhq.com/api/2.0/products?after=0"
/// );
/// assert_eq!(
///     base.flake_url("store_credits", None),
///     "https://mystore.vendhq.com/api/2.0/store_credits"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBase(String);

impl ApiBase {
    /// Base for a store on the public Vend domain.
    #[must_use]
    pub fn for_domain(prefix: &DomainPrefix) -> Self {
        Self(format!("https://{prefix}.vendhq.com{API_PATH}"))
    }

    /// Base for an explicit host, e.g. a proxy or a local mock server.
    #[must_use]
    pub fn from_host(host: &HostUrl) -> Self {
        Self(format!("{}{API_PATH}", host.as_ref()))
    }

    /// Base for a configuration: its host override, else its domain prefix.
    #[must_use]
    pub fn from_config(config: &VendConfig) -> Self {
        config
            .host()
            .map_or_else(|| Self::for_domain(config.domain_prefix()), Self::from_host)
    }

    /// Returns the base URL without a trailing slash.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `{base}/{resource}?after={cursor}`.
    #[must_use]
    pub fn version_url(&self, resource: &str, cursor: i64) -> String {
        format!("{}/{resource}?after={cursor}", self.0)
    }

    /// `{base}/{resource}`, plus `?before={id}` when `before` is a non-empty id.
    #[must_use]
    pub fn flake_url(&self, resource: &str, before: Option<&str>) -> String {
        match before.filter(|id| !id.is_empty()) {
            Some(id) => format!(
                "{}/{resource}?before={}",
                self.0,
                urlencoding::encode(id)
            ),
            None => format!("{}/{resource}", self.0),
        }
    }

    /// `{base}/products/{product_id}/actions/image_upload`.
    #[must_use]
    pub fn image_upload_url(&self, product_id: &str) -> String {
        format!(
            "{}/products/{}/actions/image_upload",
            self.0,
            urlencoding::encode(product_id)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mystore() -> ApiBase {
        ApiBase::for_domain(&DomainPrefix::new("mystore").unwrap())
    }

    #[test]
    fn test_version_url_starts_at_zero() {
        assert_eq!(
            mystore().version_url("products", 0),
            "https://mystore.vendhq.com/api/2.0/products?after=0"
        );
    }

    #[test]
    fn test_version_url_with_cursor() {
        assert_eq!(
            mystore().version_url("outlets", 4_829_113),
            "https://mystore.vendhq.com/api/2.0/outlets?after=4829113"
        );
    }

    #[test]
    fn test_flake_url_omits_query_for_first_page() {
        assert_eq!(
            mystore().flake_url("store_credits", None),
            "https://mystore.vendhq.com/api/2.0/store_credits"
        );
        assert_eq!(
            mystore().flake_url("store_credits", Some("")),
            "https://mystore.vendhq.com/api/2.0/store_credits"
        );
    }

    #[test]
    fn test_flake_url_appends_before_cursor() {
        assert_eq!(
            mystore().flake_url("store_credits", Some("0af7b240-abcd")),
            "https://mystore.vendhq.com/api/2.0/store_credits?before=0af7b240-abcd"
        );
    }

    #[test]
    fn test_flake_url_encodes_cursor() {
        assert_eq!(
            mystore().flake_url("store_credits", Some("a b&c")),
            "https://mystore.vendhq.com/api/2.0/store_credits?before=a%20b%26c"
        );
    }

    #[test]
    fn test_image_upload_url() {
        assert_eq!(
            mystore().image_upload_url("06e35f89-3783-11e6-ec7e-13193ebb4a7e"),
            "https://mystore.vendhq.com/api/2.0/products/06e35f89-3783-11e6-ec7e-13193ebb4a7e/actions/image_upload"
        );
    }

    #[test]
    fn test_host_override() {
        let base = ApiBase::from_host(&HostUrl::new("http://127.0.0.1:8080/").unwrap());
        assert_eq!(base.as_str(), "http://127.0.0.1:8080/api/2.0");
        assert_eq!(
            base.version_url("users", 7),
            "http://127.0.0.1:8080/api/2.0/users?after=7"
        );
    }
}
