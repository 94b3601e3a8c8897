//! Validated page request parameters.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page index used when a caller does not ask for one.
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when a caller does not ask for one.
pub const DEFAULT_LIMIT: usize = 10;

/// Page sizes offered by the table pager.
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [5, 10, 15, 25, 50];

/// Largest page size the pager offers.
pub const MAX_LIMIT: usize = 50;

/// Errors raised when constructing a [`PageRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// Pages are numbered from one.
    #[error("page must be at least 1")]
    ZeroPage,
    /// A page must hold at least one item.
    #[error("limit must be at least 1")]
    ZeroLimit,
}

/// A 1-based page index paired with a page size.
///
/// ## Invariants
/// - `page >= 1`
/// - `limit >= 1`
///
/// The type is `Hash` and `Eq` so it can key per-page caches.
///
/// # Examples
/// ```
/// use pagination::{PageRequest, PageRequestError};
///
/// let request = PageRequest::new(3, 10).expect("valid request");
/// assert_eq!(request.offset(), 20);
/// assert_eq!(PageRequest::new(0, 10), Err(PageRequestError::ZeroPage));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PageRequestDto", into = "PageRequestDto")]
pub struct PageRequest {
    page: usize,
    limit: usize,
}

impl PageRequest {
    /// Validate and construct a page request.
    ///
    /// # Errors
    ///
    /// Returns [`PageRequestError::ZeroPage`] when `page` is zero and
    /// [`PageRequestError::ZeroLimit`] when `limit` is zero.
    pub const fn new(page: usize, limit: usize) -> Result<Self, PageRequestError> {
        if page == 0 {
            return Err(PageRequestError::ZeroPage);
        }
        if limit == 0 {
            return Err(PageRequestError::ZeroLimit);
        }
        Ok(Self { page, limit })
    }

    /// 1-based page index.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Maximum number of items on the page.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Zero-based index of the first item on the page.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct PageRequestDto {
    page: usize,
    limit: usize,
}

impl From<PageRequest> for PageRequestDto {
    fn from(value: PageRequest) -> Self {
        Self {
            page: value.page,
            limit: value.limit,
        }
    }
}

impl TryFrom<PageRequestDto> for PageRequest {
    type Error = PageRequestError;

    fn try_from(value: PageRequestDto) -> Result<Self, Self::Error> {
        Self::new(value.page, value.limit)
    }
}

#[cfg(test)]
mod tests {
    //! Unit coverage for page request validation.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 10, 0)]
    #[case(2, 5, 5)]
    #[case(5, 10, 40)]
    #[case(6, 10, 50)]
    fn offset_skips_preceding_pages(#[case] page: usize, #[case] limit: usize, #[case] offset: usize) {
        let request = PageRequest::new(page, limit);
        assert_eq!(request.map(|value| value.offset()), Ok(offset));
    }

    #[rstest]
    #[case(0, 10, PageRequestError::ZeroPage)]
    #[case(1, 0, PageRequestError::ZeroLimit)]
    #[case(0, 0, PageRequestError::ZeroPage)]
    fn rejects_zero_parameters(
        #[case] page: usize,
        #[case] limit: usize,
        #[case] expected: PageRequestError,
    ) {
        assert_eq!(PageRequest::new(page, limit), Err(expected));
    }

    #[test]
    fn max_limit_is_the_largest_pager_option() {
        assert_eq!(PAGE_SIZE_OPTIONS.iter().max(), Some(&MAX_LIMIT));
    }

    #[test]
    fn default_is_first_page_of_ten() {
        let request = PageRequest::default();
        assert_eq!((request.page(), request.limit()), (1, 10));
    }

    #[test]
    fn offset_saturates_instead_of_overflowing() {
        let request = PageRequest::new(usize::MAX, usize::MAX);
        assert_eq!(request.map(|value| value.offset()), Ok(usize::MAX));
    }

    #[test]
    fn deserialisation_enforces_invariants() {
        let rejected = serde_json::from_str::<PageRequest>(r#"{"page":0,"limit":10}"#);
        assert!(rejected.is_err(), "zero page must not deserialise");

        let accepted = serde_json::from_str::<PageRequest>(r#"{"page":3,"limit":25}"#);
        assert_eq!(accepted.ok(), PageRequest::new(3, 25).ok());
    }
}
