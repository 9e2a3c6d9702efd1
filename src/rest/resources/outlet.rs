//! Outlet resource.
//!
//! The version stream can carry more than one record per outlet id, so
//! outlets are usually looked at through
//! [`ResourceList::group_by_id`](crate::rest::ResourceList::group_by_id):
//!
//! ```rust,ignore
//! let outlets = client.outlets().await?;
//! for (id, records) in outlets.group_by_id() {
//!     println!("{id}: {:?}", records.last().and_then(|o| o.name.as_deref()));
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{PaginationStyle, ResourceError, ResourceList, VendClient, VendResource};

/// A physical store location.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Outlet {
    /// The outlet id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The outlet name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// When the outlet was deleted, if it was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl VendResource for Outlet {
    const NAME: &'static str = "Outlet";
    const PATH: &'static str = "outlets";
    const PAGINATION: PaginationStyle = PaginationStyle::Version;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl VendClient {
    /// Fetches every outlet.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if any page fails.
    pub async fn outlets(&self) -> Result<ResourceList<Outlet>, ResourceError> {
        self.fetch_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outlet_deserialization() {
        let json = r#"{
            "id": "0adfd74a-153e-11e9-fa42-67b5781ba1fb",
            "name": "Main Street",
            "deleted_at": "2020-03-01T04:05:06+00:00",
            "time_zone": "Pacific/Auckland"
        }"#;

        let outlet: Outlet = serde_json::from_str(json).unwrap();

        assert_eq!(outlet.id(), Some("0adfd74a-153e-11e9-fa42-67b5781ba1fb"));
        assert_eq!(outlet.name.as_deref(), Some("Main Street"));
        assert_eq!(
            outlet.deleted_at.unwrap().to_rfc3339(),
            "2020-03-01T04:05:06+00:00"
        );
    }

    #[test]
    fn test_outlet_serialization_omits_missing_fields() {
        let outlet = Outlet {
            id: Some("o1".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&outlet).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "o1" }));
    }
}
