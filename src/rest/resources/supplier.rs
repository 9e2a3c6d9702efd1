//! Supplier resource.

use serde::{Deserialize, Serialize};

use crate::rest::{PaginationStyle, ResourceError, ResourceList, VendClient, VendResource};

/// A supplier products are bought from.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Supplier {
    /// The supplier id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Where the supplier record came from, e.g. `USER`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
}

/// Contact details for a [`Supplier`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_suburb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_country_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_suburb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_country_id: Option<String>,
}

impl VendResource for Supplier {
    const NAME: &'static str = "Supplier";
    const PATH: &'static str = "suppliers";
    const PAGINATION: PaginationStyle = PaginationStyle::Version;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl VendClient {
    /// Fetches every supplier.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if any page fails.
    pub async fn suppliers(&self) -> Result<ResourceList<Supplier>, ResourceError> {
        self.fetch_all().await
    }
}
