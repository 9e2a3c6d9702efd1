//! Configuration types for the Vend API client.
//!
//! # Overview
//!
//! - [`VendConfig`]: the immutable client credentials and transport settings
//! - [`VendConfigBuilder`]: a builder for constructing [`VendConfig`] instances
//! - [`ApiToken`]: a personal API token with masked debug output
//! - [`DomainPrefix`]: the store's `xxxx.vendhq.com` prefix
//! - [`StoreTimeZone`]: the timezone used to present store timestamps
//! - [`HostUrl`]: an optional host override
//!
//! # Example
//!
//! ```rust
//! use vend_api::{ApiToken, DomainPrefix, VendConfig};
//!
//! let config = VendConfig::builder()
//!     .token(ApiToken::new("my-token").unwrap())
//!     .domain_prefix(DomainPrefix::new("mystore").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.domain_prefix().as_ref(), "mystore");
//! ```

mod newtypes;

pub use newtypes::{ApiToken, DomainPrefix, HostUrl, StoreTimeZone};

use std::time::Duration;

use crate::clients::RetryPolicy;
use crate::error::ConfigError;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for the Vend API client.
///
/// Constructed once per process and shared by reference with every client.
///
/// # Thread Safety
///
/// `VendConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct VendConfig {
    token: ApiToken,
    domain_prefix: DomainPrefix,
    time_zone: StoreTimeZone,
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    timeout: Duration,
    retry_policy: RetryPolicy,
}

impl VendConfig {
    /// Creates a new builder for constructing a `VendConfig`.
    #[must_use]
    pub fn builder() -> VendConfigBuilder {
        VendConfigBuilder::new()
    }

    /// Returns the personal API token.
    #[must_use]
    pub const fn token(&self) -> &ApiToken {
        &self.token
    }

    /// Returns the store's domain prefix.
    #[must_use]
    pub const fn domain_prefix(&self) -> &DomainPrefix {
        &self.domain_prefix
    }

    /// Returns the store timezone.
    #[must_use]
    pub const fn time_zone(&self) -> StoreTimeZone {
        self.time_zone
    }

    /// Returns the host override, if configured.
    #[must_use]
    pub const fn host(&self) -> Option<&HostUrl> {
        self.host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the retry policy applied to every request.
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }
}

// Verify VendConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<VendConfig>();
};

/// Builder for constructing [`VendConfig`] instances.
///
/// Required fields are `token` and `domain_prefix`.
///
/// # Defaults
///
/// - `time_zone`: [`StoreTimeZone::Local`]
/// - `host`: `None` (`https://{prefix}.vendhq.com`)
/// - `user_agent_prefix`: `None`
/// - `timeout`: 60 seconds
/// - `retry_policy`: [`RetryPolicy::default`]
#[derive(Debug, Default)]
pub struct VendConfigBuilder {
    token: Option<ApiToken>,
    domain_prefix: Option<DomainPrefix>,
    time_zone: Option<StoreTimeZone>,
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    retry_policy: Option<RetryPolicy>,
}

impl VendConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the personal API token (required).
    #[must_use]
    pub fn token(mut self, token: ApiToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets the store's domain prefix (required).
    #[must_use]
    pub fn domain_prefix(mut self, prefix: DomainPrefix) -> Self {
        self.domain_prefix = Some(prefix);
        self
    }

    /// Sets the store timezone.
    #[must_use]
    pub const fn time_zone(mut self, time_zone: StoreTimeZone) -> Self {
        self.time_zone = Some(time_zone);
        self
    }

    /// Sends every request to `host` instead of `https://{prefix}.vendhq.com`.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the retry policy.
    #[must_use]
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = Some(policy);
        self
    }

    /// Builds the [`VendConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `token` or
    /// `domain_prefix` was not set, and [`ConfigError::InvalidRetryPolicy`]
    /// if the timeout is zero.
    pub fn build(self) -> Result<VendConfig, ConfigError> {
        let token = self
            .token
            .ok_or(ConfigError::MissingRequiredField { field: "token" })?;
        let domain_prefix = self
            .domain_prefix
            .ok_or(ConfigError::MissingRequiredField {
                field: "domain_prefix",
            })?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::InvalidRetryPolicy {
                reason: "request timeout must be greater than zero".to_string(),
            });
        }

        Ok(VendConfig {
            token,
            domain_prefix,
            time_zone: self.time_zone.unwrap_or_default(),
            host: self.host,
            user_agent_prefix: self.user_agent_prefix,
            timeout,
            retry_policy: self.retry_policy.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required() -> VendConfigBuilder {
        VendConfig::builder()
            .token(ApiToken::new("secret-value").unwrap())
            .domain_prefix(DomainPrefix::new("mystore").unwrap())
    }

    #[test]
    fn test_builder_requires_token() {
        let result = VendConfig::builder()
            .domain_prefix(DomainPrefix::new("mystore").unwrap())
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "token" })
        ));
    }

    #[test]
    fn test_builder_requires_domain_prefix() {
        let result = VendConfig::builder()
            .token(ApiToken::new("token").unwrap())
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "domain_prefix"
            })
        ));
    }

    #[test]
    fn test_builder_applies_defaults() {
        let config = required().build().unwrap();
        assert_eq!(config.time_zone(), StoreTimeZone::Local);
        assert!(config.host().is_none());
        assert!(config.user_agent_prefix().is_none());
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(config.retry_policy().max_attempts(), RetryPolicy::DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn test_builder_rejects_zero_timeout() {
        let result = required().timeout(Duration::ZERO).build();
        assert!(matches!(result, Err(ConfigError::InvalidRetryPolicy { .. })));
    }

    #[test]
    fn test_config_debug_masks_token() {
        let config = required().build().unwrap();
        let debug = format!("{config:?}");
        assert!(debug.contains("ApiToken(*****)"));
        assert!(!debug.contains("secret-value"));
    }
}
