//! User resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{PaginationStyle, ResourceError, ResourceList, VendClient, VendResource};

/// A staff account on the store.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct User {
    /// The user id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Login name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Name shown on receipts and in the till.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl VendResource for User {
    const NAME: &'static str = "User";
    const PATH: &'static str = "users";
    const PAGINATION: PaginationStyle = PaginationStyle::Version;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl VendClient {
    /// Fetches every user.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if any page fails.
    pub async fn users(&self) -> Result<ResourceList<User>, ResourceError> {
        self.fetch_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserialization() {
        let json = r#"{
            "id": "u1",
            "username": "jo",
            "display_name": "Jo Bloggs",
            "email": "jo@example.com",
            "account_type": "admin"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.id(), Some("u1"));
        assert_eq!(user.username.as_deref(), Some("jo"));
        assert_eq!(user.display_name.as_deref(), Some("Jo Bloggs"));
        assert_eq!(user.email.as_deref(), Some("jo@example.com"));
        assert!(user.deleted_at.is_none());
    }
}
