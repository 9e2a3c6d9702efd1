//! Consignment resource.
//!
//! Consignments cover stock orders, returns, transfers and stocktakes.
//! `consignment_date` is kept as the raw string the API sends; use
//! [`Consignment::consignment_date_in`] to read it in the store timezone.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::config::StoreTimeZone;
use crate::rest::{PaginationStyle, ResourceError, ResourceList, VendClient, VendResource};
use crate::time::parse_vend_datetime;

/// A stock movement into, out of, or between outlets.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Consignment {
    /// The consignment id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The outlet the consignment belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlet_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// `SUPPLIER`, `OUTLET`, `RETURN` or `STOCKTAKE`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub consignment_type: Option<String>,

    /// Workflow state, e.g. `OPEN`, `SENT`, `RECEIVED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// When the consignment was raised, as sent by the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consignment_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Consignment {
    /// Parses `consignment_date` into `time_zone`.
    ///
    /// Returns `None` when the date is absent.
    ///
    /// # Errors
    ///
    /// Returns [`chrono::ParseError`] if the date is present but malformed.
    pub fn consignment_date_in(
        &self,
        time_zone: StoreTimeZone,
    ) -> Result<Option<DateTime<FixedOffset>>, chrono::ParseError> {
        self.consignment_date
            .as_deref()
            .map(|dt| parse_vend_datetime(dt, time_zone))
            .transpose()
    }
}

impl VendResource for Consignment {
    const NAME: &'static str = "Consignment";
    const PATH: &'static str = "consignments";
    const PAGINATION: PaginationStyle = PaginationStyle::Version;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl VendClient {
    /// Fetches every consignment.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if any page fails.
    pub async fn consignments(&self) -> Result<ResourceList<Consignment>, ResourceError> {
        self.fetch_all().await
    }
}
