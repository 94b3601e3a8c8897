//! Domain types and services.
//!
//! Public surface:
//! - [`registration`]: form record, rule chains, and the registration flow.
//! - [`UsersPageService`]: paged, cached view over the users directory.
//! - [`Error`] / [`ErrorCode`]: API error payload shared by inbound adapters.
//! - [`ports`]: driven ports implemented by outbound adapters.

pub mod error;
pub mod ports;
pub mod registration;
pub mod trace_id;
pub mod user;
mod users_page_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::trace_id::TraceId;
pub use self::user::{User, UserStatus, UsersPage};
pub use self::users_page_service::{DEFAULT_STALE_AFTER, MAX_CACHED_PAGES, UsersPageService};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use showcase::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::invalid_request("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
