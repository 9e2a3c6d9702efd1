//! The accumulated result of a paginated fetch.
//!
//! [`ResourceList<T>`] implements `Deref<Target = Vec<T>>`, so it can be
//! used like the vector of records it wraps:
//!
//! ```rust,ignore
//! let products = client.products().await?;
//!
//! for product in products.iter() {
//!     println!("{:?}", product.name);
//! }
//! println!("{} products in {} pages", products.len(), products.pages());
//!
//! let by_id = products.index_by_id();
//! ```

use std::collections::HashMap;
use std::ops::Deref;

use crate::rest::VendResource;

/// Records from every page of a resource, in arrival order.
///
/// # Example
///
/// ```rust
/// use vend_api::rest::ResourceList;
///
/// let list = ResourceList::new(vec!["a", "b", "c"], 2);
/// assert_eq!(list.len(), 3);
/// assert_eq!(list[0], "a");
/// assert_eq!(list.pages(), 2);
/// let inner: Vec<&str> = list.into_inner();
/// assert_eq!(inner, vec!["a", "b", "c"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceList<T> {
    items: Vec<T>,
    pages: usize,
}

impl<T> ResourceList<T> {
    /// Creates a list from `items` gathered over `pages` requests.
    #[must_use]
    pub const fn new(items: Vec<T>, pages: usize) -> Self {
        Self { items, pages }
    }

    /// Number of page requests made, the terminating page included.
    #[must_use]
    pub const fn pages(&self) -> usize {
        self.pages
    }

    /// Consumes the list and returns the records.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T: VendResource + Clone> ResourceList<T> {
    /// Maps each id to its record. Later records win over earlier ones with
    /// the same id; records without an id are skipped.
    #[must_use]
    pub fn index_by_id(&self) -> HashMap<String, T> {
        self.items
            .iter()
            .filter_map(|item| item.id().map(|id| (id.to_string(), item.clone())))
            .collect()
    }

    /// Maps each id to every record carrying it, in arrival order. Records
    /// without an id are skipped.
    #[must_use]
    pub fn group_by_id(&self) -> HashMap<String, Vec<T>> {
        let mut groups: HashMap<String, Vec<T>> = HashMap::new();
        for item in &self.items {
            if let Some(id) = item.id() {
                groups.entry(id.to_string()).or_default().push(item.clone());
            }
        }
        groups
    }
}

impl<T> Deref for ResourceList<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> IntoIterator for ResourceList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ResourceList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;
    use crate::rest::PaginationStyle;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Tag {
        id: Option<String>,
        label: String,
    }

    impl VendResource for Tag {
        const NAME: &'static str = "Tag";
        const PATH: &'static str = "tags";
        const PAGINATION: PaginationStyle = PaginationStyle::Version;

        fn id(&self) -> Option<&str> {
            self.id.as_deref()
        }
    }

    fn tag(id: Option<&str>, label: &str) -> Tag {
        Tag {
            id: id.map(String::from),
            label: label.to_string(),
        }
    }

    #[test]
    fn test_index_by_id_keeps_last_record() {
        let list = ResourceList::new(
            vec![tag(Some("a"), "first"), tag(Some("a"), "second"), tag(None, "orphan")],
            1,
        );
        let index = list.index_by_id();
        assert_eq!(index.len(), 1);
        assert_eq!(index["a"].label, "second");
    }

    #[test]
    fn test_group_by_id_keeps_every_record() {
        let list = ResourceList::new(
            vec![tag(Some("a"), "first"), tag(Some("b"), "other"), tag(Some("a"), "second")],
            1,
        );
        let groups = list.group_by_id();
        let labels: Vec<_> = groups["a"].iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second"]);
        assert_eq!(groups["b"].len(), 1);
    }

    #[test]
    fn test_iterates_by_reference_and_value() {
        let list = ResourceList::new(vec![1, 2, 3], 2);
        let sum: i32 = (&list).into_iter().sum();
        assert_eq!(sum, 6);
        let doubled: Vec<i32> = list.into_iter().map(|n| n * 2).collect();
        assert_eq!(doubled, vec![2, 4, 6]);
    }
}
