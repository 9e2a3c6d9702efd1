//! Store credit resource.
//!
//! Store credits are listed newest first with `?before={id}` cursors; see
//! [`PaginationStyle::Flake`].

use serde::{Deserialize, Serialize};

use crate::rest::{PaginationStyle, ResourceError, ResourceList, VendClient, VendResource};

/// A customer's store credit account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StoreCredit {
    /// The store credit id, also the flake cursor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,

    /// Credit currently available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_credit_issued: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_credit_redeemed: Option<f64>,

    /// Every issue and redemption on the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_credit_transactions: Option<Vec<StoreCreditTransaction>>,
}

/// One movement on a [`StoreCredit`] account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StoreCreditTransaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Positive when issued, negative when redeemed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    /// `ISSUE`, `REDEMPTION`, `REVERSAL`, ...
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl StoreCredit {
    /// Sum of every transaction amount on the account.
    #[must_use]
    pub fn transaction_total(&self) -> f64 {
        self.store_credit_transactions
            .iter()
            .flatten()
            .filter_map(|t| t.amount)
            .sum()
    }
}

impl VendResource for StoreCredit {
    const NAME: &'static str = "StoreCredit";
    const PATH: &'static str = "store_credits";
    const PAGINATION: PaginationStyle = PaginationStyle::Flake;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl VendClient {
    /// Fetches every store credit account.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if any page fails, or a record needed as a
    /// cursor has no id.
    pub async fn store_credits(&self) -> Result<ResourceList<StoreCredit>, ResourceError> {
        self.fetch_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_credit_deserialization() {
        let json = r#"{
            "id": "sc1",
            "customer_id": "cust1",
            "balance": 12.5,
            "total_credit_issued": 20.0,
            "total_credit_redeemed": 7.5,
            "store_credit_transactions": [
                {"id": "t1", "amount": 20.0, "type": "ISSUE", "user_id": "u1"},
                {"id": "t2", "amount": -7.5, "type": "REDEMPTION", "sale_id": "sale1"}
            ]
        }"#;

        let credit: StoreCredit = serde_json::from_str(json).unwrap();

        assert_eq!(credit.id(), Some("sc1"));
        assert_eq!(credit.balance, Some(12.5));
        let transactions = credit.store_credit_transactions.as_deref().unwrap();
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[1].transaction_type.as_deref(), Some("REDEMPTION"));
        assert!((credit.transaction_total() - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_store_credit_without_transactions() {
        let credit: StoreCredit =
            serde_json::from_str(r#"{"id": "sc2", "store_credit_transactions": null}"#).unwrap();
        assert!(credit.store_credit_transactions.is_none());
        assert!(credit.transaction_total().abs() < f64::EPSILON);
    }

    #[test]
    fn test_store_credit_uses_flake_pagination() {
        assert_eq!(StoreCredit::PAGINATION, PaginationStyle::Flake);
        assert_eq!(StoreCredit::PATH, "store_credits");
    }
}
