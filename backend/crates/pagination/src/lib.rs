//! Page request, page envelope, and pager summary primitives.
//!
//! Endpoints that page over an in-memory collection share three pieces:
//!
//! - [`PageRequest`] validates a 1-based page index and a page size.
//! - [`Page`] carries one slice of a collection together with the size of the
//!   full collection.
//! - [`PageSummary`] derives the navigation state a pager control renders:
//!   page count, the visible item range, and previous/next availability.
//!
//! # Example
//!
//! ```
//! use pagination::{Page, PageRequest};
//!
//! let request = PageRequest::new(2, 5).expect("valid request");
//! let page = Page::from_collection((1..=15).collect::<Vec<u32>>(), request);
//!
//! assert_eq!(page.items(), &[6, 7, 8, 9, 10]);
//! assert_eq!(page.total(), 15);
//! assert_eq!(page.summary().range_label(), "6-10 of 15");
//! ```

mod page;
mod request;
mod summary;

pub use page::Page;
pub use request::{
    DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT, PAGE_SIZE_OPTIONS, PageRequest, PageRequestError,
};
pub use summary::PageSummary;
