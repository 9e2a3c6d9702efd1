//! Register resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{PaginationStyle, ResourceError, ResourceList, VendClient, VendResource};

/// A point-of-sale register.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Register {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl VendResource for Register {
    const NAME: &'static str = "Register";
    const PATH: &'static str = "registers";
    const PAGINATION: PaginationStyle = PaginationStyle::Version;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl VendClient {
    /// Fetches every register.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if any page fails.
    pub async fn registers(&self) -> Result<ResourceList<Register>, ResourceError> {
        self.fetch_all().await
    }
}
