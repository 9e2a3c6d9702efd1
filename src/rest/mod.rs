//! Resource layer for the Vend API.
//!
//! - [`VendClient`]: lists resources and uploads product images
//! - [`VendResource`] and [`PaginationStyle`]: how a record type is paged
//! - [`ResourceList<T>`]: the accumulated records, `Deref` to `Vec<T>`
//! - [`ApiBase`]: URL construction
//! - [`ResourceError`] and [`PaginationError`]: failures above the HTTP layer
//! - [`resources`]: the concrete record types
//!
//! # Example
//!
//! ```rust,ignore
//! use vend_api::rest::resources::Product;
//!
//! let products = client.products().await?;
//! let by_id = products.index_by_id();
//!
//! // Any resource can also be fetched generically.
//! let same = client.fetch_all::<Product>().await?;
//! assert_eq!(products, same);
//! ```

mod client;
mod errors;
pub mod pagination;
mod path;
mod resource;
pub mod resources;
mod response;

pub use client::VendClient;
pub use errors::{PaginationError, ResourceError};
pub use path::{ApiBase, API_PATH};
pub use resource::{PaginationStyle, VendResource};
pub use response::ResourceList;
