//! Page-by-page retrieval of whole resources.
//!
//! Two protocols are supported, selected by [`PaginationStyle`]:
//!
//! - **Version**: request `?after=0`, append the page, continue from the
//!   envelope's `version.max`; the first empty page ends the stream.
//! - **Flake**: request without a cursor, then `?before={last id}`. Each
//!   later page repeats the previous boundary record, which is dropped. A
//!   page with at most one record ends the stream and is not appended.
//!
//! Pages are fetched strictly one after another.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::clients::HttpClient;
use crate::rest::{ApiBase, PaginationError, PaginationStyle, ResourceError, ResourceList, VendResource};

/// `{"data": [...], "version": {"min": n, "max": n}}`
#[derive(Debug, Deserialize)]
struct VersionEnvelope<T> {
    data: Option<Vec<T>>,
    version: Option<HashMap<String, Option<i64>>>,
}

impl<T> VersionEnvelope<T> {
    fn max_version(&self) -> Option<i64> {
        self.version.as_ref()?.get("max").copied().flatten()
    }
}

/// `{"data": [...]}`
#[derive(Debug, Deserialize)]
struct FlakeEnvelope<T> {
    data: Option<Vec<T>>,
}

fn decode<E: DeserializeOwned>(resource: &'static str, body: &[u8]) -> Result<E, ResourceError> {
    serde_json::from_slice(body).map_err(|source| ResourceError::decode(resource, source))
}

/// Fetches every record of `T`, using the protocol `T` declares.
///
/// # Errors
///
/// Returns [`ResourceError`] if a request fails, a page cannot be decoded,
/// or the server breaks the cursor protocol.
pub async fn fetch_all<T: VendResource>(
    http: &HttpClient,
    base: &ApiBase,
) -> Result<ResourceList<T>, ResourceError> {
    let list = match T::PAGINATION {
        PaginationStyle::Version => fetch_version_pages(http, base, T::PATH).await?,
        PaginationStyle::Flake => fetch_flake_pages(http, base, T::PATH, T::id).await?,
    };
    tracing::info!(
        resource = T::NAME,
        records = list.len(),
        pages = list.pages(),
        "fetched resource"
    );
    Ok(list)
}

/// Pages through `resource` with `?after={version}` cursors.
///
/// # Errors
///
/// Besides request and decode failures, a non-empty page without a max
/// version, or with one that does not advance the cursor, is a
/// [`PaginationError`].
pub async fn fetch_version_pages<T: DeserializeOwned>(
    http: &HttpClient,
    base: &ApiBase,
    resource: &'static str,
) -> Result<ResourceList<T>, ResourceError> {
    let mut items = Vec::new();
    let mut pages = 0;
    let mut cursor: i64 = 0;

    loop {
        let body = http.get_bytes(&base.version_url(resource, cursor)).await?;
        pages += 1;

        let envelope: VersionEnvelope<T> = decode(resource, &body)?;
        let max = envelope.max_version();
        let page = envelope.data.unwrap_or_default();
        tracing::debug!(resource, cursor, records = page.len(), "fetched version page");

        if page.is_empty() {
            break;
        }

        let max = max.ok_or(PaginationError::MissingVersion { resource, cursor })?;
        if max <= cursor {
            return Err(PaginationError::StalledVersion {
                resource,
                cursor,
                max,
            }
            .into());
        }

        items.extend(page);
        cursor = max;
    }

    Ok(ResourceList::new(items, pages))
}

/// Pages backwards through `resource` with `?before={id}` cursors, where
/// `id_of` reads a record's identifier.
///
/// # Errors
///
/// Besides request and decode failures, a record without an id at the end
/// of a page that would continue the stream is a
/// [`PaginationError::MissingId`].
pub async fn fetch_flake_pages<T, F>(
    http: &HttpClient,
    base: &ApiBase,
    resource: &'static str,
    id_of: F,
) -> Result<ResourceList<T>, ResourceError>
where
    T: DeserializeOwned,
    F: Fn(&T) -> Option<&str>,
{
    let mut items = Vec::new();
    let mut pages = 0;
    let mut cursor: Option<String> = None;

    loop {
        let body = http
            .get_bytes(&base.flake_url(resource, cursor.as_deref()))
            .await?;
        pages += 1;

        let envelope: FlakeEnvelope<T> = decode(resource, &body)?;
        let page = envelope.data.unwrap_or_default();
        let page_len = page.len();
        tracing::debug!(resource, cursor = ?cursor, records = page_len, "fetched flake page");

        // Past the first page, a single record is the previous boundary again.
        if cursor.is_some() && page_len <= 1 {
            break;
        }

        let next = match page.last() {
            Some(last) if page_len > 1 => Some(
                id_of(last)
                    .ok_or(PaginationError::MissingId { resource })?
                    .to_string(),
            ),
            _ => None,
        };

        let before = items.len();
        match cursor.as_deref() {
            Some(previous) => items.extend(page.into_iter().filter(|r| id_of(r) != Some(previous))),
            None => items.extend(page),
        }
        let added = items.len() - before;

        match next {
            Some(next) if added > 0 && cursor.as_deref() != Some(next.as_str()) => {
                cursor = Some(next);
            }
            _ => break,
        }
    }

    Ok(ResourceList::new(items, pages))
}
