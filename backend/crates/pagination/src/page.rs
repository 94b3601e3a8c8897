//! Page envelope over an ordered collection.

use serde::{Deserialize, Serialize};

use crate::{PageRequest, PageSummary};

/// One page of an ordered collection.
///
/// `total` always reports the size of the full backing collection, so a
/// page past the end carries no items but still tells the caller how many
/// exist.
///
/// ## Invariants
/// - `items.len() == min(limit, total.saturating_sub((page - 1) * limit))`
///   when built through [`Page::from_collection`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    items: Vec<T>,
    total: usize,
    page: usize,
    limit: usize,
}

impl<T> Page<T> {
    /// Slice the page described by `request` out of the full collection.
    ///
    /// The collection order is preserved. Requests past the last page yield
    /// an empty page rather than an error.
    ///
    /// # Examples
    /// ```
    /// use pagination::{Page, PageRequest};
    ///
    /// let request = PageRequest::new(4, 10).expect("valid request");
    /// let page = Page::from_collection(vec!["a", "b"], request);
    /// assert!(page.items().is_empty());
    /// assert_eq!(page.total(), 2);
    /// ```
    #[must_use]
    pub fn from_collection(collection: Vec<T>, request: PageRequest) -> Self {
        let total = collection.len();
        let items = collection
            .into_iter()
            .skip(request.offset())
            .take(request.limit())
            .collect();
        Self {
            items,
            total,
            page: request.page(),
            limit: request.limit(),
        }
    }

    /// Items on this page, in collection order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Size of the full backing collection.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// 1-based page index this envelope was built for.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Page size this envelope was built for.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Navigation state for pager controls.
    #[must_use]
    pub const fn summary(&self) -> PageSummary {
        PageSummary::from_parts(self.total, self.page, self.limit)
    }

    /// Consume the envelope, returning `(items, total, page, limit)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, usize, usize, usize) {
        (self.items, self.total, self.page, self.limit)
    }
}

#[cfg(test)]
mod tests {
    //! Slice behaviour for in-memory collections.

    use super::*;
    use rstest::rstest;

    fn numbered(count: usize) -> Vec<usize> {
        (1..=count).collect()
    }

    fn request(page: usize, limit: usize) -> PageRequest {
        match PageRequest::new(page, limit) {
            Ok(value) => value,
            Err(error) => panic!("test request must be valid: {error}"),
        }
    }

    #[rstest]
    #[case::first_page(47, 1, 10, 10)]
    #[case::last_partial_page(47, 5, 10, 7)]
    #[case::past_the_end(47, 6, 10, 0)]
    #[case::empty_collection(0, 1, 10, 0)]
    #[case::exact_fit(20, 2, 10, 10)]
    #[case::far_past_the_end(1, 5, 10, 0)]
    fn page_length_matches_remaining_items(
        #[case] total: usize,
        #[case] page: usize,
        #[case] limit: usize,
        #[case] expected_len: usize,
    ) {
        let sliced = Page::from_collection(numbered(total), request(page, limit));

        assert_eq!(sliced.items().len(), expected_len);
        assert_eq!(sliced.total(), total, "total must ignore paging");
        assert_eq!((sliced.page(), sliced.limit()), (page, limit));
    }

    #[test]
    fn preserves_collection_order() {
        let sliced = Page::from_collection(numbered(15), request(2, 5));
        assert_eq!(sliced.items(), &[6, 7, 8, 9, 10]);
    }

    #[test]
    fn serialises_with_stable_keys() {
        let sliced = Page::from_collection(vec!["x"], PageRequest::default());
        let json = serde_json::to_value(&sliced).map_err(|error| error.to_string());
        assert_eq!(
            json,
            Ok(serde_json::json!({ "items": ["x"], "total": 1, "page": 1, "limit": 10 }))
        );
    }
}
