//! Navigation state for pager controls.

use serde::Serialize;

use crate::PageRequest;

/// Derived pager state for one page of a collection.
///
/// Item positions are 1-based, matching the "6-10 of 15" label a pager shows.
/// For an empty collection every count is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    total_items: usize,
    total_pages: usize,
    current_page: usize,
    first_item: usize,
    last_item: usize,
    has_previous: bool,
    has_next: bool,
}

impl PageSummary {
    /// Summarise `request` over a collection holding `total` items.
    ///
    /// # Examples
    /// ```
    /// use pagination::{PageRequest, PageSummary};
    ///
    /// let request = PageRequest::new(5, 10).expect("valid request");
    /// let summary = PageSummary::new(47, request);
    /// assert_eq!(summary.total_pages(), 5);
    /// assert_eq!(summary.range_label(), "41-47 of 47");
    /// assert!(!summary.has_next());
    /// ```
    #[must_use]
    pub const fn new(total: usize, request: PageRequest) -> Self {
        Self::from_parts(total, request.page(), request.limit())
    }

    pub(crate) const fn from_parts(total: usize, page: usize, limit: usize) -> Self {
        let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit) };
        let (first_item, last_item) = if total == 0 {
            (0, 0)
        } else {
            let first = page.saturating_sub(1).saturating_mul(limit).saturating_add(1);
            let last = page.saturating_mul(limit);
            (min(first, total), min(last, total))
        };
        Self {
            total_items: total,
            total_pages,
            current_page: page,
            first_item,
            last_item,
            has_previous: page > 1,
            has_next: page < total_pages,
        }
    }

    /// Size of the full collection.
    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    /// Number of pages needed to show every item; zero when empty.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// 1-based index of the page being summarised.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// 1-based position of the first visible item.
    #[must_use]
    pub const fn first_item(&self) -> usize {
        self.first_item
    }

    /// 1-based position of the last visible item.
    #[must_use]
    pub const fn last_item(&self) -> usize {
        self.last_item
    }

    /// Whether a previous page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.has_previous
    }

    /// Whether a following page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.has_next
    }

    /// Human-readable range such as `"6-10 of 15"`, or `"0 of 0"` when empty.
    #[must_use]
    pub fn range_label(&self) -> String {
        if self.total_items == 0 {
            "0 of 0".to_owned()
        } else {
            format!(
                "{}-{} of {}",
                self.first_item, self.last_item, self.total_items
            )
        }
    }
}

const fn min(left: usize, right: usize) -> usize {
    if left < right { left } else { right }
}

#[cfg(test)]
mod tests {
    //! Pager arithmetic.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty(0, 1, 10, 0, "0 of 0")]
    #[case::single_page(2, 1, 10, 1, "1-2 of 2")]
    #[case::middle(15, 2, 5, 3, "6-10 of 15")]
    #[case::last_partial(47, 5, 10, 5, "41-47 of 47")]
    #[case::past_the_end(47, 6, 10, 5, "47-47 of 47")]
    fn derives_pages_and_label(
        #[case] total: usize,
        #[case] page: usize,
        #[case] limit: usize,
        #[case] pages: usize,
        #[case] label: &str,
    ) {
        let summary = PageSummary::from_parts(total, page, limit);
        assert_eq!(summary.total_pages(), pages);
        assert_eq!(summary.range_label(), label);
    }

    #[rstest]
    #[case(1, false, true)]
    #[case(2, true, true)]
    #[case(3, true, false)]
    fn navigation_flags_follow_position(
        #[case] page: usize,
        #[case] has_previous: bool,
        #[case] has_next: bool,
    ) {
        let summary = PageSummary::from_parts(25, page, 10);
        assert_eq!(summary.has_previous(), has_previous);
        assert_eq!(summary.has_next(), has_next);
    }

    #[test]
    fn empty_collection_has_no_navigation() {
        let summary = PageSummary::new(0, PageRequest::default());
        assert_eq!((summary.first_item(), summary.last_item()), (0, 0));
        assert!(!summary.has_previous());
        assert!(!summary.has_next());
    }
}
