//! # Vend API Rust Client
//!
//! A Rust client for the Vend (Lightspeed Retail X-Series) 2.0 API: type-safe
//! configuration, a retrying HTTP layer, and whole-resource listing over both
//! of Vend's pagination schemes.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`VendConfig`] and [`VendConfigBuilder`]
//! - Validated newtypes for the API token, domain prefix and store timezone
//! - An async HTTP client with bounded retries and polynomial backoff
//! - Cooperative cancellation via [`CancelToken`]
//! - Version-cursor and flake-cursor pagination behind [`VendClient`]
//! - Typed records for products, outlets, consignments, registers, users,
//!   suppliers and store credits
//! - Product image upload
//!
//! ## Quick Start
//!
//! ```rust
//! use vend_api::{ApiToken, DomainPrefix, VendConfig};
//!
//! let config = VendConfig::builder()
//!     .token(ApiToken::new("your-personal-token").unwrap())
//!     .domain_prefix(DomainPrefix::new("mystore").unwrap())
//!     .time_zone("+12:00".parse().unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.domain_prefix().as_ref(), "mystore");
//! ```
//!
//! ## Listing Resources
//!
//! ```rust,ignore
//! use vend_api::{VendClient, VendConfig};
//!
//! let client = VendClient::new(&config)?;
//!
//! let products = client.products().await?;
//! println!("{} products over {} pages", products.len(), products.pages());
//!
//! let by_id = products.index_by_id();
//! let outlets = client.outlets().await?.group_by_id();
//! let credits = client.store_credits().await?;
//! ```
//!
//! ## Retries
//!
//! Every request runs through one loop: success statuses (200, 201) return,
//! 401, 404 and 502 fail immediately with [`HttpError::Fatal`], and anything
//! else, including transport errors, is retried after
//! [`backoff_duration`] until the [`RetryPolicy`] is exhausted.
//!
//! ```rust
//! use std::time::Duration;
//! use vend_api::RetryPolicy;
//!
//! let policy = RetryPolicy::new(3)
//!     .unwrap()
//!     .with_max_elapsed(Duration::from_secs(120));
//! assert_eq!(policy.max_attempts(), 3);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is passed explicitly
//! - **Fail-fast validation**: newtypes validate on construction
//! - **Typed errors**: the library never exits the process
//! - **Async, sequential paging**: one request in flight per fetch

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
pub mod time;

// Re-export public types at crate root for convenience
pub use config::{ApiToken, DomainPrefix, HostUrl, StoreTimeZone, VendConfig, VendConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    backoff_duration, CancelToken, FatalStatus, FatalStatusError, HttpClient, HttpError,
    HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse, InvalidHttpRequestError,
    MaxHttpRetriesExceededError, MultipartFile, RetryPolicy,
};

// Re-export resource types
pub use rest::resources::{
    Consignment, ImageUpload, Outlet, Product, ProductUpload, Register, StoreCredit, Supplier,
    User,
};
pub use rest::{PaginationError, PaginationStyle, ResourceError, ResourceList, VendClient, VendResource};
