//! Record types for the Vend 2.0 endpoints.
//!
//! Every record implements [`VendResource`](crate::rest::VendResource) and
//! has a named accessor on [`VendClient`](crate::rest::VendClient):
//!
//! | Record          | Accessor          | Path              | Pagination |
//! |-----------------|-------------------|-------------------|------------|
//! | [`Consignment`] | `consignments()`  | `consignments`    | version    |
//! | [`Outlet`]      | `outlets()`       | `outlets`         | version    |
//! | [`Product`]     | `products()`      | `products`        | version    |
//! | [`Register`]    | `registers()`     | `registers`       | version    |
//! | [`StoreCredit`] | `store_credits()` | `store_credits`   | flake      |
//! | [`Supplier`]    | `suppliers()`     | `suppliers`       | version    |
//! | [`User`]        | `users()`         | `users`           | version    |
//!
//! Fields are optional throughout: the API omits or nulls them freely, and a
//! missing field is not an error.
//!
//! Product images are written with
//! [`VendClient::upload_image`](crate::rest::VendClient::upload_image).

mod consignment;
mod image;
mod outlet;
mod product;
mod register;
mod store_credit;
mod supplier;
mod user;

pub use consignment::Consignment;
pub use image::{ImageUpload, ProductUpload};
pub use outlet::Outlet;
pub use product::{Image, Inventory, PriceBookEntry, Product, Tax};
pub use register::Register;
pub use store_credit::{StoreCredit, StoreCreditTransaction};
pub use supplier::{Contact, Supplier};
pub use user::User;
