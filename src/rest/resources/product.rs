//! Product resource.
//!
//! Products carry their per-outlet inventory, price book entries, taxes and
//! images inline. Products are commonly looked up by id:
//!
//! ```rust,ignore
//! let products = client.products().await?;
//! let by_id = products.index_by_id();
//! if let Some(product) = by_id.get("b8ca3a65-0183-11e4-fbb5-2816d2677218") {
//!     println!("{:?} at {:?}", product.name, product.price);
//! }
//! ```
//!
//! Inventory quantities are strings, exactly as the 2.0 API returns them.

use serde::{Deserialize, Serialize};

use crate::rest::{PaginationStyle, ResourceError, ResourceList, VendClient, VendResource};

/// A product or product variant.
///
/// # Variants
///
/// A variant product points at its parent with `variant_parent_id` and
/// describes itself with up to three option name/value pairs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Product {
    /// The product id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Id in the system the product was imported from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_source_id: Option<String>,

    /// Groups a product with its variants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_variants: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_parent_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_option_one_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_option_one_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_option_two_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_option_two_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_option_three_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_option_three_value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Thumbnail image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_large: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<Image>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Comma-separated tag names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supply_price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_code_purchase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_code_sales: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_inventory: Option<bool>,

    /// Stock levels, one entry per outlet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory: Option<Vec<Inventory>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_book_entries: Option<Vec<PriceBookEntry>>,

    /// Retail price excluding tax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_name: Option<String>,

    /// Tax per outlet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxes: Option<Vec<Tax>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
}

impl Product {
    /// Returns `true` if the product has been deleted.
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.as_deref().is_some_and(|d| !d.is_empty())
    }

    /// Returns the inventory entry for `outlet_id`.
    #[must_use]
    pub fn inventory_at(&self, outlet_id: &str) -> Option<&Inventory> {
        self.inventory
            .as_deref()?
            .iter()
            .find(|i| i.outlet_id.as_deref() == Some(outlet_id))
    }
}

/// Stock of a product at one outlet.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Inventory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlet_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reorder_point: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restock_level: Option<String>,
}

/// A price for a product in one price book.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PriceBookEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_book_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_book_name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlet_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loyalty_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_retail_price_tax_inclusive: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_units: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_units: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<String>,
}

/// The tax applied to a product at one outlet.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Tax {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
}

/// An image attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Image {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
}

impl VendResource for Product {
    const NAME: &'static str = "Product";
    const PATH: &'static str = "products";
    const PAGINATION: PaginationStyle = PaginationStyle::Version;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl VendClient {
    /// Fetches every product.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if any page fails.
    pub async fn products(&self) -> Result<ResourceList<Product>, ResourceError> {
        self.fetch_all().await
    }
}
