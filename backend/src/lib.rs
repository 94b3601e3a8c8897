//! Registration form validation and paged user retrieval for the accessible
//! dashboard showcase.
//!
//! The crate follows a ports-and-adapters layout: [`domain`] holds the
//! validation rules and the cached users page service, [`outbound`] talks to
//! the users directory over HTTP, and [`inbound`] exposes both over REST.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
